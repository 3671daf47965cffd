//! Password composition policy and validator.
//!
//! The crate is pure: no I/O, no shared mutable state.
//!
//! - **[`policy`]**: Policy value (minimum length, special character set).
//! - **[`rules`]**: One predicate per policy dimension.
//! - **[`validate`]**: The [`PasswordValidator`] port and the rule-based
//!   [`RuleValidator`] that ANDs every rule.

pub mod policy;
pub mod rules;
pub mod validate;

pub use policy::{DEFAULT_SPECIAL_CHARS, MIN_PASSWORD_LENGTH, PasswordPolicy};
pub use rules::Rule;
pub use validate::{PasswordValidator, RuleValidator};
