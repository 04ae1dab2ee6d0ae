use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, Claims, TokenVerifier};
use crate::application::services::{BiographyError, BiographySelection};
use crate::presentation::state::AppState;

use super::digitize::completion_error_response;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiographyRequest {
    pub folders: Vec<String>,
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    #[serde(default)]
    pub focus_topic: Option<String>,
}

fn default_word_count() -> u32 {
    500
}

#[derive(Serialize)]
pub struct BiographyResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, claims, request), fields(folders = request.folders.len()))]
pub async fn biography_handler<C, V>(
    State(state): State<AppState<C, V>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<BiographyRequest>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    if request.folders.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "At least one book must be selected".to_string(),
            }),
        )
            .into_response();
    }

    if state.settings.ai.api_key.is_none() {
        tracing::error!("AI gateway credential is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "AI service not configured".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(subject = %claims.subject, "Generating biography");

    let selection = BiographySelection {
        folders: request.folders,
        word_count: request.word_count,
        focus_topic: request.focus_topic,
    };

    match state.biography_service.generate(&selection).await {
        Ok(text) => (StatusCode::OK, Json(BiographyResponse { text })).into_response(),
        Err(BiographyError::NoMatchingEntries) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No entries found in the selected books".to_string(),
            }),
        )
            .into_response(),
        Err(BiographyError::PromptTooLong { chars }) => {
            tracing::warn!(chars, "Biography selection exceeds the prompt ceiling");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Selected entries are too large to synthesize (max 50,000 characters)"
                        .to_string(),
                }),
            )
                .into_response()
        }
        Err(BiographyError::Repository(e)) => {
            tracing::error!(error = %e, "Failed to load entries for biography");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load entries".to_string(),
                }),
            )
                .into_response()
        }
        Err(BiographyError::Completion(e)) => {
            completion_error_response(e, "Failed to generate biography")
        }
    }
}
