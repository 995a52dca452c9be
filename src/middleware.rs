use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, info_span, Instrument};

/// Wrap each request in an `http` span and log its outcome
pub async fn trace(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().to_string();
    let span = info_span!("http", %method, %uri);

    async move {
        let started = Instant::now();
        let resp = next.run(req).await;
        info!(
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request finished"
        );
        resp
    }
    .instrument(span)
    .await
}
