//! Prometheus metrics collection middleware
//!
//! Records `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) for every request that matched a route, with method/path/status
//! labels. The path label is the route template, so label cardinality stays
//! bounded.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Middleware that records request count and duration metrics.
///
/// Installed with `route_layer`, so the matched route is always known.
pub async fn metrics_middleware(matched: MatchedPath, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = matched.as_str().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(duration);

    response
}
