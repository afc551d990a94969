//! HTTP API handlers.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::debug;

use crate::converter;
use crate::error::ConvertError;
use crate::metrics;

/// Usage guide served for `/` and every unmatched path.
pub const USAGE_GUIDE: &str = "
Usage Guide:
GET /convert/<value>/<input-format>/<output-format>

<value>: Any alphanumeric value in the format specified by <input-format>
<input-format> and <output-format>:
  dec: Decimal (base-10) format
  bin: Binary (base-2) format
  hex: Hexadecimal (base-16) format

Example: /convert/1010/bin/dec
";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Prometheus render handle, present when metrics are enabled.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with metrics disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create app state that serves the given Prometheus handle.
    pub fn with_prometheus(handle: PrometheusHandle) -> Self {
        Self {
            prometheus: Some(handle),
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Conversion handler - 200 with the numeral, 400 with the error message.
pub async fn convert(
    Path((value, input_format, output_format)): Path<(String, String, String)>,
) -> Result<String, ConvertError> {
    let start = Instant::now();
    let result = {
        let _timer = metrics::timer_conversion();
        converter::convert(&value, &input_format, &output_format)
    };
    metrics::record_http_latency(start, "convert");

    match &result {
        Ok(_) => metrics::inc_conversions(),
        Err(e) => {
            debug!(kind = e.kind(), error = %e, "conversion rejected");
            metrics::inc_conversion_errors(e.kind());
        }
    }

    result
}

/// Health check handler - always returns 200.
pub async fn health() -> &'static str {
    "OK"
}

/// Usage guide handler, used as the router fallback.
pub async fn usage() -> &'static str {
    USAGE_GUIDE
}

/// Prometheus scrape handler.
pub async fn metrics_export(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn usage_guide_mentions_example_and_tags() {
        assert!(USAGE_GUIDE.contains("/convert/1010/bin/dec"));
        for tag in converter::Radix::ALL {
            assert!(USAGE_GUIDE.contains(&format!("{tag}:")));
        }
    }

    #[tokio::test]
    async fn convert_error_maps_to_bad_request() {
        let response = ConvertError::InvalidInputFormat("oct".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Invalid input format: oct");
    }

    #[tokio::test]
    async fn metrics_export_without_handle_is_not_found() {
        let response = metrics_export(State(AppState::new())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
