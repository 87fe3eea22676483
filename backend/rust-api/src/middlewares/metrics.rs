use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

/// Middleware recording request count and latency for every HTTP request.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, path, &status])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, path])
        .observe(duration);

    response
}

/// The route set is static, so anything unrecognized folds into a single
/// label to keep metric cardinality bounded.
fn route_label(path: &str) -> &'static str {
    match path {
        "/questions" => "/questions",
        "/health" => "/health",
        "/metrics" => "/metrics",
        _ => "other",
    }
}
