use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::oauth::Provider;
use crate::state::AppState;

#[derive(Serialize)]
pub struct OAuthAvailability {
    pub google: bool,
    pub github: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub oauth: OAuthAvailability,
}

/// GET /api/health
/// Service status and which sign-in providers are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        oauth: OAuthAvailability {
            google: state.oauth.is_configured(Provider::Google),
            github: state.oauth.is_configured(Provider::Github),
        },
    })
}
