use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatClient, TokenVerifier};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    biography_handler, create_entry_handler, digitize_handler, folders_handler, health_handler,
    list_entries_handler, search_entries_handler,
};
use crate::presentation::middleware::require_bearer;
use crate::presentation::state::AppState;

pub fn create_router<C, V>(state: AppState<C, V>) -> Router
where
    C: ChatClient + 'static,
    V: TokenVerifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let protected = Router::new()
        .route("/api/v1/digitize", post(digitize_handler::<C, V>))
        .route(
            "/api/v1/entries",
            get(list_entries_handler::<C, V>).post(create_entry_handler::<C, V>),
        )
        .route("/api/v1/entries/search", get(search_entries_handler::<C, V>))
        .route("/api/v1/folders", get(folders_handler::<C, V>))
        .route("/api/v1/biography", post(biography_handler::<C, V>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<C, V>,
        ));

    Router::new()
        .route("/health", get(health_handler::<C, V>))
        .merge(protected)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(DefaultBodyLimit::max(11_000_000))
        .with_state(state)
}
