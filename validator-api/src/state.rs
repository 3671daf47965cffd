//! Shared application state for the API server.

use std::sync::Arc;

use validator::{PasswordValidator, RuleValidator};

/// State accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validator behind the port, so alternate rule sets can be swapped in.
    pub validator: Arc<dyn PasswordValidator>,
}

impl AppState {
    pub fn new(validator: Arc<dyn PasswordValidator>) -> Self {
        Self { validator }
    }
}

impl From<RuleValidator> for AppState {
    fn from(validator: RuleValidator) -> Self {
        Self::new(Arc::new(validator))
    }
}
