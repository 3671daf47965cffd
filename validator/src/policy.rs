//! Password policy parameters.

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Minimum number of characters a password must contain.
pub const MIN_PASSWORD_LENGTH: usize = 9;

/// Characters that satisfy the special-character rule.
///
/// `^` is the ASCII caret (U+005E), not the modifier circumflex (U+02C6).
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()-+";

/// Thresholds and character sets used by the rule engine.
///
/// The policy is an immutable value handed to the validator at construction.
/// Missing fields deserialize to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length, counted in `char`s.
    pub min_length: usize,

    /// Set of accepted special characters. Written as a single string in
    /// config files (e.g. `"!@#"`).
    #[serde(with = "char_set")]
    pub special_chars: BTreeSet<char>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            special_chars: DEFAULT_SPECIAL_CHARS.chars().collect(),
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize, special_chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            min_length,
            special_chars: special_chars.into_iter().collect(),
        }
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }

    /// Reject policies no password could satisfy consistently.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(anyhow!("min_length must be > 0"));
        }
        if self.special_chars.is_empty() {
            return Err(anyhow!("special_chars must not be empty"));
        }
        if let Some(c) = self.special_chars.iter().find(|c| c.is_whitespace()) {
            return Err(anyhow!("special_chars must not contain whitespace ({:?})", c));
        }
        if let Some(c) = self.special_chars.iter().find(|c| c.is_alphanumeric()) {
            return Err(anyhow!(
                "special_chars must not contain letters or digits ({:?})",
                c
            ));
        }
        Ok(())
    }
}

mod char_set {
    use std::collections::BTreeSet;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(set: &BTreeSet<char>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let joined: String = set.iter().collect();
        serializer.serialize_str(&joined)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeSet<char>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.chars().collect())
    }
}
