//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level. If a body
/// is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and the
/// full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = body_to_text(body).await;
    log_payload("Received request", &format!("{parts:#?}"), &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = body_to_text(body).await;
    log_payload("Sending response", &format!("{parts:#?}"), &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn body_to_text(body: axum::body::Body) -> String {
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    String::from_utf8_lossy(&body_bytes).to_string()
}

/// The maximum number of body bytes logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

fn log_payload(label: &str, head: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{label}: {head}\nbody: {:}...",
            &body[..LOG_BODY_LENGTH_LIMIT]
        );
        tracing::debug!("Full {label} body: {body:?}");
    } else {
        tracing::info!("{label}: {head}\nbody: {body:?}");
    }
}
