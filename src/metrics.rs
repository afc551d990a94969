//! Prometheus metrics for conversion traffic.
//!
//! Recording goes through the `metrics` facade and is a no-op until a
//! recorder is installed with [`install_prometheus`].

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Conversion latency metric name.
pub const METRIC_CONVERSION_LATENCY: &str = "conversion_latency_ms";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Successful conversions counter metric name.
pub const METRIC_CONVERSIONS: &str = "conversions_total";
/// Failed conversions counter metric name.
pub const METRIC_CONVERSION_ERRORS: &str = "conversion_errors_total";

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_CONVERSION_LATENCY,
        "Numeral conversion latency in milliseconds"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_CONVERSIONS, "Total number of successful conversions");
    describe_counter!(
        METRIC_CONVERSION_ERRORS,
        "Total number of rejected conversions, by error kind"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// Increment successful conversions counter.
pub fn inc_conversions() {
    counter!(METRIC_CONVERSIONS).increment(1);
}

/// Increment failed conversions counter for the given error kind.
pub fn inc_conversion_errors(kind: &'static str) {
    counter!(METRIC_CONVERSION_ERRORS, "kind" => kind).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for a single conversion.
pub fn timer_conversion() -> LatencyTimer {
    LatencyTimer::new(METRIC_CONVERSION_LATENCY)
}
