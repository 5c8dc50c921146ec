use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

/// Logs the method and path of every inbound request.
///
/// Responses in the 4xx or 5xx range get a second event with status, latency
/// and a preview of the body. The body is buffered so the same payload can
/// still be forwarded to the caller after logging.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    tracing::info!(method = %method, path = %path, "Handle request");

    let start = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if !(status.is_client_error() || status.is_server_error()) {
        tracing::debug!(
            status = status.as_u16(),
            method = %method,
            path = %path,
            latency_ms,
            "Request completed"
        );
        return response;
    }

    let (mut parts, body) = response.into_parts();
    match buffer_body(body).await {
        Ok((bytes, preview)) => {
            log_error_event(status.as_u16(), &method, &path, latency_ms, &preview, None);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            log_error_event(status.as_u16(), &method, &path, latency_ms, "", Some(err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

async fn buffer_body(body: Body) -> Result<(Bytes, String), AxumError> {
    let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES).await?;
    Ok((bytes.clone(), preview(&bytes)))
}

fn preview(bytes: &Bytes) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        let slice = bytes.slice(0..MAX_LOGGED_BODY_BYTES);
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&slice),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

fn log_error_event(
    status: u16,
    method: &str,
    path: &str,
    latency_ms: u64,
    body_preview: &str,
    body_error: Option<AxumError>,
) {
    match (body_error, status >= 500) {
        (Some(err), true) => tracing::error!(
            status,
            method,
            path,
            latency_ms,
            error = ?err,
            "Failed to read error response body"
        ),
        (Some(err), false) => tracing::warn!(
            status,
            method,
            path,
            latency_ms,
            error = ?err,
            "Failed to read error response body"
        ),
        (None, true) => tracing::error!(
            status,
            method,
            path,
            latency_ms,
            body = body_preview,
            "Request completed with error status"
        ),
        (None, false) => tracing::warn!(
            status,
            method,
            path,
            latency_ms,
            body = body_preview,
            "Request completed with error status"
        ),
    }
}
