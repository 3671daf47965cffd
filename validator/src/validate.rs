//! Password validation port and the rule-based implementation.

use tracing::{Level, debug};

use crate::policy::PasswordPolicy;
use crate::rules::Rule;

/// Decides whether a candidate password is acceptable.
///
/// Implementations must be total: every input, including `None`, yields a
/// verdict rather than an error.
pub trait PasswordValidator: Send + Sync {
    fn is_valid(&self, password: Option<&str>) -> bool;
}

/// Accepts a password only if it passes every [`Rule`] under its policy.
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    policy: PasswordPolicy,
}

impl RuleValidator {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Rules the password fails, in [`Rule::ALL`] order.
    pub fn failed_rules(&self, password: Option<&str>) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| !rule.check(password, &self.policy))
            .collect()
    }
}

impl PasswordValidator for RuleValidator {
    fn is_valid(&self, password: Option<&str>) -> bool {
        let valid = Rule::ALL.iter().all(|rule| rule.check(password, &self.policy));
        if !valid && tracing::enabled!(Level::DEBUG) {
            let labels: Vec<&str> = self
                .failed_rules(password)
                .iter()
                .map(|rule| rule.label())
                .collect();
            debug!(failed = ?labels, "password rejected");
        }
        valid
    }
}
