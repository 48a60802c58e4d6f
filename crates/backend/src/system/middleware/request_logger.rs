use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Журнал HTTP запросов: метод, путь, статус, длительность, размер ответа.
///
/// Static assets are served with Content-Length, so only API responses
/// get buffered to measure them.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let known_len = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    let (response, size) = match known_len {
        Some(len) => (response, Some(len)),
        None => {
            let (parts, body) = response.into_parts();
            match to_bytes(body, usize::MAX).await {
                Ok(bytes) => {
                    let len = bytes.len();
                    (Response::from_parts(parts, Body::from(bytes)), Some(len))
                }
                Err(e) => {
                    tracing::warn!("Failed to read response body for {}: {}", path, e);
                    (Response::from_parts(parts, Body::default()), None)
                }
            }
        }
    };

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();
    let size = size.map(format_size).unwrap_or_else(|| "error".to_string());

    if status >= 500 {
        tracing::warn!(target: "http", "{} {} {} | {}ms | {}", status, method, path, elapsed_ms, size);
    } else {
        tracing::info!(target: "http", "{} {} {} | {}ms | {}", status, method, path, elapsed_ms, size);
    }

    response
}
