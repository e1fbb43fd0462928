use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// RED style request metrics, scraped from /metrics
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();

    // matched path so /statuses/{status_id} doesn't explode cardinality
    let path = if let Some(matched) = request.extensions().get::<MatchedPath>() {
        matched.as_str().to_owned()
    } else {
        request.uri().path().to_owned()
    };
    let method = request.method().to_string();

    let response = next.run(request).await;

    let labels = [
        ("method", method),
        ("path", path),
        ("status", response.status().as_u16().to_string()),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());

    response
}
