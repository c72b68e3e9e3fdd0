use axum::http::{Method, StatusCode};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

pub const REQUESTS_TOTAL: &str = "http_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const ERRORS_TOTAL: &str = "http_errors_total";

/// Prometheus recorder owned by one server instance, so several servers can run in one process.
pub struct HttpMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl HttpMetrics {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::describe_counter!(REQUESTS_TOTAL, "Total HTTP requests");
            metrics::describe_histogram!(REQUEST_DURATION_SECONDS, metrics::Unit::Seconds, "HTTP request duration");
            metrics::describe_counter!(ERRORS_TOTAL, "Total HTTP responses with an error status");
        });

        Self { recorder, handle }
    }

    /// `endpoint` is the matched route, not the raw path, to keep label cardinality bounded.
    pub fn record(&self, method: &Method, endpoint: &str, status: StatusCode, duration_seconds: f64) {
        let method = method.to_string();
        let endpoint = endpoint.to_string();
        let status_code = status.as_u16().to_string();

        metrics::with_local_recorder(&self.recorder, || {
            metrics::counter!(
                REQUESTS_TOTAL,
                "method" => method.clone(),
                "endpoint" => endpoint.clone(),
                "status" => status_code.clone()
            )
            .increment(1);
            metrics::histogram!(REQUEST_DURATION_SECONDS, "method" => method.clone(), "endpoint" => endpoint.clone())
                .record(duration_seconds);

            if status.is_client_error() || status.is_server_error() {
                metrics::counter!(ERRORS_TOTAL, "method" => method, "endpoint" => endpoint, "status" => status_code)
                    .increment(1);
            }
        });
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_and_errors_are_counted_per_endpoint() {
        let metrics = HttpMetrics::new();
        metrics.record(&Method::GET, "/api/health", StatusCode::OK, 0.002);
        metrics.record(&Method::GET, "/api/health", StatusCode::OK, 0.004);
        metrics.record(&Method::POST, "/api/chat", StatusCode::UNPROCESSABLE_ENTITY, 0.001);

        let text = metrics.render();
        let line = |name: &str, endpoint: &str| {
            text.lines()
                .find(|line| line.starts_with(&format!("{name}{{")) && line.contains(&format!("endpoint=\"{endpoint}\"")))
                .map(str::to_owned)
        };

        assert!(line(REQUESTS_TOTAL, "/api/health").unwrap().ends_with(" 2"), "{text}");
        assert!(line(ERRORS_TOTAL, "/api/chat").unwrap().contains("status=\"422\""), "{text}");
        assert!(line(ERRORS_TOTAL, "/api/health").is_none(), "{text}");
        assert!(text.contains(REQUEST_DURATION_SECONDS), "{text}");
    }

    #[test]
    fn instances_do_not_share_counters() {
        let first = HttpMetrics::new();
        let second = HttpMetrics::new();
        first.record(&Method::GET, "/", StatusCode::OK, 0.001);

        assert!(first.render().contains(REQUESTS_TOTAL));
        assert!(!second.render().contains("endpoint=\"/\""));
    }
}
