use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ChatClient, TokenVerifier};
use crate::presentation::state::AppState;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Rejects the request with 401 unless it carries a bearer token the identity
/// service accepts. Verified claims are attached for downstream handlers.
pub async fn require_bearer<C, V>(
    State(state): State<AppState<C, V>>,
    mut request: Request,
    next: Next,
) -> Response
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let token = match token {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return unauthorized("Unauthorized"),
    };

    match state.token_verifier.verify(&token).await {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "Bearer token rejected");
            unauthorized("Unauthorized - Invalid token")
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
