//! Root welcome endpoint.

use crate::{APP_TAG, WELCOME_MESSAGE};

/// GET / — returns the welcome message as plain text.
#[utoipa::path(
    get,
    path = "/",
    tag = APP_TAG,
    summary = "Root endpoint",
    description = "Returns a welcome message",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain",
            example = "Spring Boot CRUD API is running!")
    )
)]
#[tracing::instrument]
pub async fn welcome() -> &'static str {
    metrics::counter!("http_requests_total", "route" => "/").increment(1);
    WELCOME_MESSAGE
}
