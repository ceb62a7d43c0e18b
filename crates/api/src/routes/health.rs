//! Health check endpoint.

use axum::Json;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{APP_TAG, SERVICE_NAME, SERVICE_VERSION};

/// Health status payload returned by `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Local date-time of the check, ISO-8601 without offset.
    #[schema(example = "2024-03-10T15:30:45.123456")]
    pub timestamp: String,
    #[schema(example = "Spring Boot CRUD API")]
    pub service: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
}

impl HealthResponse {
    /// Builds the payload stamped with `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            status: "ok",
            timestamp: format_local_timestamp(now),
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }
}

/// Formats `dt` as an ISO-8601 local date-time (`YYYY-MM-DDTHH:MM:SS[.ffffff]`).
///
/// The fraction is kept to microseconds, trailing zeros are dropped, and it is
/// left out entirely on a whole second.
pub fn format_local_timestamp(dt: NaiveDateTime) -> String {
    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();

    // Leap-second nanos (>= 1e9) clamp to the last representable micro.
    let micros = (dt.nanosecond() / 1_000).min(999_999);
    if micros > 0 {
        let fraction = format!("{micros:06}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// GET /health — returns service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = APP_TAG,
    summary = "Health check",
    description = "Returns the application health status",
    responses(
        (status = 200, description = "Health status", body = HealthResponse)
    )
)]
#[tracing::instrument]
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse::at(Local::now().naive_local()))
}
