use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ChatClient, TokenVerifier};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// False when the AI gateway credential is missing, meaning digitization
    /// requests will be refused until it is configured.
    pub ai_configured: bool,
}

pub async fn health_handler<C, V>(State(state): State<AppState<C, V>>) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            ai_configured: state.settings.ai.api_key.is_some(),
        }),
    )
}
