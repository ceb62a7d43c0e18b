//! OpenAPI document derived from the handler annotations.

use axum::Json;
use utoipa::OpenApi;

/// Path the OpenAPI JSON document is served from.
pub const OPENAPI_PATH: &str = "/v3/api-docs";

/// OpenAPI description of the service.
///
/// Generated at compile time from the `#[utoipa::path]` attributes on the
/// handlers; a new route only shows up here once it is listed in `paths`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::welcome,
        crate::routes::health::check,
    ),
    components(schemas(crate::routes::health::HealthResponse)),
    tags(
        (name = "Application", description = "Application health and status APIs")
    ),
    info(
        title = "Spring Boot CRUD API",
        version = "1.0.0",
        description = "Application health and status endpoints",
    )
)]
pub struct ApiDoc;

/// GET /v3/api-docs — returns the OpenAPI document as JSON.
pub async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
