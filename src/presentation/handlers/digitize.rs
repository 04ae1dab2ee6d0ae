use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;

use crate::application::ports::{ChatClient, ChatClientError, Claims, TokenVerifier};
use crate::application::services::{DigitizeCommand, MAX_IMAGE_CHARS, MAX_PROMPT_CHARS};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DigitizeResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The digitization gateway. Field-by-field validation; every failure leaves
/// as a `{error}` JSON body with the matching status.
#[tracing::instrument(skip(state, claims, body))]
pub async fn digitize_handler<C, V>(
    State(state): State<AppState<C, V>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    let command = match parse_command(&body) {
        Ok(command) => command,
        Err(message) => {
            tracing::warn!(subject = %claims.subject, error = %message, "Rejected digitize request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response();
        }
    };

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

    if let DigitizeCommand::Synthesize { prompt } = &command {
        tracing::debug!(subject = %claims.subject, prompt = %sanitize_prompt(prompt), "Dispatching synthesis");
    }

    let generic_message = match &command {
        DigitizeCommand::Transcribe { .. } => "Failed to process image",
        DigitizeCommand::Synthesize { .. } => "Failed to generate biography",
    };

    match state.digitize_service.digitize(&command).await {
        Ok(text) => (StatusCode::OK, Json(DigitizeResponse { text })).into_response(),
        Err(e) => completion_error_response(e, generic_message),
    }
}

fn parse_command(body: &serde_json::Value) -> Result<DigitizeCommand, String> {
    let prompt_field = body.get("prompt").filter(|v| !v.is_null());
    if let Some(value) = prompt_field {
        if !value.is_string() {
            return Err("Invalid prompt: must be a string".to_string());
        }
    }
    let prompt = prompt_field
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    if let Some(p) = prompt {
        if p.len() > MAX_PROMPT_CHARS {
            return Err("Prompt too long (max 50,000 characters)".to_string());
        }
    }

    let image_field = body.get("imageBase64").filter(|v| !v.is_null());
    if let Some(value) = image_field {
        if !value.is_string() {
            return Err("Invalid image data".to_string());
        }
    }
    let image = image_field
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    if let Some(i) = image {
        if i.len() > MAX_IMAGE_CHARS {
            return Err("Image too large (max ~7.5MB)".to_string());
        }
    }

    match (prompt, image) {
        (Some(prompt), None) => Ok(DigitizeCommand::Synthesize {
            prompt: prompt.to_string(),
        }),
        (None, Some(image)) => Ok(DigitizeCommand::Transcribe {
            image_base64: image.to_string(),
        }),
        (None, None) => Err("No image provided".to_string()),
        (Some(_), Some(_)) => {
            Err("Request cannot include both a prompt and an image".to_string())
        }
    }
}

/// Maps a relay failure to the caller-facing status and message. Upstream
/// detail never leaves the log.
pub(super) fn completion_error_response(
    error: ChatClientError,
    generic_message: &str,
) -> axum::response::Response {
    let (status, message) = match error {
        ChatClientError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again in a moment.".to_string(),
        ),
        ChatClientError::QuotaExhausted => (
            StatusCode::PAYMENT_REQUIRED,
            "AI credits exhausted. Please add more credits to continue.".to_string(),
        ),
        ChatClientError::ApiRequestFailed(_) | ChatClientError::InvalidResponse(_) => {
            tracing::error!(error = %error, "Digitization failed");
            (StatusCode::INTERNAL_SERVER_ERROR, generic_message.to_string())
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
