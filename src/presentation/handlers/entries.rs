use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, Claims, TokenVerifier};
use crate::domain::{derive_folders, Attachments, Entry};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub text: String,
    pub folder: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gallery_count: u32,
    #[serde(default)]
    pub has_audio: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: String,
    pub text: String,
    pub folder: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_end: Option<DateTime<Utc>>,
    pub attachments: AttachmentsView,
}

#[derive(Serialize)]
pub struct AttachmentsView {
    pub photos: u32,
    pub audio: bool,
}

impl From<Entry> for EntryView {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.as_uuid().to_string(),
            text: entry.text,
            folder: entry.folder,
            location: entry.location,
            timestamp: entry.timestamp,
            timestamp_end: entry.timestamp_end,
            attachments: AttachmentsView {
                photos: entry.attachments.photos,
                audio: entry.attachments.audio,
            },
        }
    }
}

#[derive(Serialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntryView>,
}

#[derive(Serialize)]
pub struct FoldersResponse {
    pub folders: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, claims, request))]
pub async fn create_entry_handler<C, V>(
    State(state): State<AppState<C, V>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateEntryRequest>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Entry text must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    if request.folder.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Entry folder must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let entry = Entry::new(
        request.text,
        request.folder,
        request.location,
        request.date_start,
        request.date_end,
        Attachments {
            photos: request.gallery_count,
            audio: request.has_audio,
        },
    );

    if let Err(e) = state.entry_repository.insert(&entry).await {
        tracing::error!(error = %e, "Failed to archive entry");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save entry".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        subject = %claims.subject,
        entry_id = %entry.id.as_uuid(),
        folder = %entry.folder,
        text = %sanitize_prompt(&entry.text),
        "Entry archived"
    );

    (StatusCode::CREATED, Json(EntryView::from(entry))).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn list_entries_handler<C, V>(State(state): State<AppState<C, V>>) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    match state.entry_repository.list().await {
        Ok(entries) => (
            StatusCode::OK,
            Json(ListEntriesResponse {
                entries: entries.into_iter().map(EntryView::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list entries");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load entries".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn folders_handler<C, V>(State(state): State<AppState<C, V>>) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    match state.entry_repository.list().await {
        Ok(entries) => (
            StatusCode::OK,
            Json(FoldersResponse {
                folders: derive_folders(&entries),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to derive folders");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load folders".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub folder: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<EntryView>,
}

/// Case-insensitive substring search over text, location, and folder name,
/// optionally narrowed to one folder. No query and no folder means no results.
#[tracing::instrument(skip(state, params))]
pub async fn search_entries_handler<C, V>(
    State(state): State<AppState<C, V>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    let query = params.q.trim();
    if query.is_empty() && params.folder.is_none() {
        return (StatusCode::OK, Json(SearchResponse { results: vec![] })).into_response();
    }

    match state.entry_repository.list().await {
        Ok(entries) => {
            let results = entries
                .into_iter()
                .filter(|e| {
                    params
                        .folder
                        .as_ref()
                        .map(|f| &e.folder == f)
                        .unwrap_or(true)
                })
                .filter(|e| query.is_empty() || e.matches_query(query))
                .map(EntryView::from)
                .collect();

            (StatusCode::OK, Json(SearchResponse { results })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search entries".to_string(),
                }),
            )
                .into_response()
        }
    }
}
