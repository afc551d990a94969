//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{convert, health, metrics_export, usage, AppState};

/// Create the API router.
///
/// `/metrics` is only routed when the state carries a Prometheus handle;
/// otherwise it falls through to the usage guide like any unknown path.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/convert/:value/:input_format/:output_format", get(convert))
        .route("/health", get(health));

    if state.prometheus.is_some() {
        router = router.route("/metrics", get(metrics_export));
    }

    router
        .fallback(usage)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
