use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_ID_LENGTH: usize = 128;

/// Tags every request with an id for log correlation. A plausible
/// caller-supplied `x-request-id` is kept; a missing or garbage one is
/// replaced with a freshly minted id. The id covers all logs emitted while
/// the request is in flight and is echoed on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let inbound = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| is_plausible_id(id));

    let (request_id, inherited) = match inbound {
        Some(id) => (id.to_string(), true),
        None => (Uuid::new_v4().simple().to_string(), false),
    };

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        inherited,
        method = %request.method(),
        path = %request.uri().path()
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

fn is_plausible_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LENGTH && id.chars().all(|c| c.is_ascii_graphic())
}
