//! HTTP adapter around the password validator.
//!
//! - **[`config`]**: TOML configuration (listen address, password policy).
//! - **[`logging`]**: `tracing` subscriber setup.
//! - **[`routes`]**: Axum router and handlers.
//! - **[`state`]**: State shared by every handler.

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
