//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency by method, route
//!
//! # Design Decisions
//! - Route label is the matched template, never the raw path
//! - Without an installed exporter the macros are no-ops

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every request that passes through the router.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, &path, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::http::HttpServer;
    use metrics_exporter_prometheus::PrometheusRecorder;
    use tower::ServiceExt;

    fn counter_line<'a>(rendered: &'a str, labels: &[&str]) -> Option<&'a str> {
        rendered.lines().find(|line| {
            line.starts_with("http_requests_total{") && labels.iter().all(|l| line.contains(l))
        })
    }

    /// Send `uri` through a default router with `recorder` installed on this thread.
    fn serve_once(recorder: &PrometheusRecorder, uri: &str) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let router = HttpServer::new(ServiceConfig::default()).router();
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        metrics::with_local_recorder(recorder, || {
            runtime.block_on(router.oneshot(request)).unwrap();
        });
    }

    #[test]
    fn test_record_request_renders_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_request("GET", "/add/{a}/{b}", 200, Instant::now());
        });

        let rendered = handle.render();
        let line = counter_line(
            &rendered,
            &[r#"method="GET""#, r#"path="/add/{a}/{b}""#, r#"status="200""#],
        )
        .unwrap_or_else(|| panic!("counter missing from:\n{rendered}"));
        assert!(line.ends_with(" 1"), "{line}");
        assert!(rendered.contains("http_request_duration_seconds_count{"));
    }

    #[test]
    fn test_matched_route_uses_template() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        serve_once(&recorder, "/add/1/2");

        let rendered = handle.render();
        assert!(
            counter_line(&rendered, &[r#"path="/add/{a}/{b}""#, r#"status="200""#]).is_some(),
            "{rendered}"
        );
        assert!(!rendered.contains(r#"path="/add/1/2""#));
    }

    #[test]
    fn test_unknown_route_is_unmatched() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        serve_once(&recorder, "/nope");

        let rendered = handle.render();
        assert!(
            counter_line(&rendered, &[r#"path="unmatched""#, r#"status="404""#]).is_some(),
            "{rendered}"
        );
    }
}
