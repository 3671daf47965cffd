//! HTTP route handlers.

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::state::AppState;

/// Build the full application: `/api` routes plus request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/password/validate", post(validate_password))
}

async fn health() -> &'static str {
    "ok"
}

/// Request body. An absent or `null` password is accepted and judged invalid.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub is_valid: bool,
}

/// POST /api/v1/password/validate - returns `{"isValid": bool}`.
async fn validate_password(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let is_valid = state.validator.is_valid(request.password.as_deref());
    debug!(is_valid, "password validated");
    Json(ValidateResponse { is_valid })
}
