use axum::{http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Request log line with a per-request trace id. The id is also put into
/// request extensions so handlers can tag their own log lines with it.
pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    let trace_id = Uuid::new_v4();
    req.extensions_mut().insert(trace_id);
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();

    info!(trace_id = %trace_id, method = %method, uri = %uri, status = status, elapsed_ms = elapsed, "Request log");
    response
}
