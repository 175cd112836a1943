use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_bytes;

/// Middleware for HTTP request logging
///
/// Logs status, method, path, duration and the declared response size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_bytes)
        .unwrap_or_else(|| "-".to_string());
    let duration = start.elapsed().as_millis();

    if response.status().is_success() {
        tracing::info!(
            "{} {:>6} {} | {:>5}ms | {:>12}",
            status,
            method.as_str(),
            path,
            duration,
            size
        );
    } else {
        tracing::warn!(
            "{} {:>6} {} | {:>5}ms | {:>12}",
            status,
            method.as_str(),
            path,
            duration,
            size
        );
    }

    response
}
