//! HTTP status API: a welcome route and a health check, served with
//! permissive CORS, request tracing and a generated OpenAPI document.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod telemetry;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Name reported by the health check and the API document.
pub const SERVICE_NAME: &str = "Spring Boot CRUD API";

/// Version reported by the health check and the API document.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str = "Spring Boot CRUD API is running!";

/// OpenAPI tag shared by the application routes.
pub const APP_TAG: &str = "Application";

/// Creates the Axum application router.
///
/// `/` and `/health` are always mounted. The OpenAPI document follows
/// `config.docs_enabled`, and `/metrics` is mounted only when a Prometheus
/// handle is supplied.
pub fn create_app(config: &Config, metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::check));

    if config.docs_enabled {
        app = app.merge(docs_router());
    }

    if let Some(handle) = metrics_handle {
        let metrics_router = Router::new()
            .route("/metrics", get(routes::metrics::render))
            .with_state(handle);
        app = app.merge(metrics_router);
    }

    app.fallback(routes::not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router {
    Router::new().route(openapi::OPENAPI_PATH, get(openapi::document))
}

#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router {
    use utoipa::OpenApi;

    // SwaggerUi serves the JSON document itself, alongside the UI assets.
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url(openapi::OPENAPI_PATH, openapi::ApiDoc::openapi())
        .into()
}
