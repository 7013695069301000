//! Prometheus metrics collection for the gateway

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!(
        "fortune_gateway_requests_total",
        "Total number of proxied requests"
    );
    describe_counter!("fortune_gateway_errors_total", "Total number of errors");

    describe_histogram!(
        "fortune_gateway_request_latency_seconds",
        "Inbound request latency in seconds"
    );
    describe_histogram!(
        "fortune_gateway_backend_latency_seconds",
        "Outbound backend call latency in seconds"
    );
}

/// Record a completed proxy request
pub fn record_request(route: &'static str, latency_seconds: f64) {
    counter!("fortune_gateway_requests_total", 1, "route" => route);
    histogram!("fortune_gateway_request_latency_seconds", latency_seconds, "route" => route);
}

/// Record an outbound backend call
pub fn record_backend_call(operation: &'static str, latency_seconds: f64) {
    histogram!("fortune_gateway_backend_latency_seconds", latency_seconds, "operation" => operation);
}

/// Record an error
pub fn record_error(error_type: &'static str) {
    counter!("fortune_gateway_errors_total", 1, "type" => error_type);
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Initialize Prometheus exporter and stash the handle
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Failed to set Prometheus handle"))?;
    Ok(())
}

/// Get Prometheus metrics string
pub fn get_prometheus_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Prometheus metrics not initialized\n".to_string())
}
