//! Prometheus scrape endpoint, mounted only when metrics are enabled.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics — renders the recorder in Prometheus text exposition format.
pub async fn render(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], handle.render())
}
