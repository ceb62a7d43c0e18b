//! Integration tests for the API server.

use std::sync::OnceLock;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use chrono::NaiveDateTime;
use crud_api::config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    crud_api::create_app(&Config::default(), None)
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn header_str<'a>(response: &'a Response, name: header::HeaderName) -> &'a str {
    response
        .headers()
        .get(name)
        .expect("header should be present")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let response = get(setup(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, header::CONTENT_TYPE).starts_with("text/plain"));

    let body = body_bytes(response).await;
    assert_eq!(body, b"Spring Boot CRUD API is running!");
}

#[tokio::test]
async fn test_health_check() {
    let response = get(setup(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, header::CONTENT_TYPE),
        "application/json"
    );

    let json = body_json(response).await;
    let object = json.as_object().expect("health body should be an object");
    assert_eq!(object.len(), 4);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "Spring Boot CRUD API");
    assert_eq!(json["version"], "1.0.0");

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(
        timestamp.parse::<NaiveDateTime>().is_ok(),
        "timestamp {timestamp:?} should be an ISO-8601 local date-time"
    );
    assert!(!timestamp.ends_with('Z') && !timestamp.contains('+'));
}

#[tokio::test]
async fn test_health_timestamps_do_not_go_backwards() {
    let app = setup();

    let first = body_json(get(app.clone(), "/health").await).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = body_json(get(app, "/health").await).await;

    let first: NaiveDateTime = first["timestamp"].as_str().unwrap().parse().unwrap();
    let second: NaiveDateTime = second["timestamp"].as_str().unwrap().parse().unwrap();
    assert!(second >= first, "{second} should not precede {first}");
}

#[tokio::test]
async fn test_both_routes_allow_any_origin() {
    for uri in ["/", "/health"] {
        let response = get(setup(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "*",
            "missing wildcard CORS header on {uri}"
        );
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .is_none()
        );
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/health")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "*"
    );
}

#[tokio::test]
async fn test_head_request_is_answered() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = get(setup(), "/users").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "*"
    );

    let json = body_json(response).await;
    assert_eq!(json["error"], "no route for GET /users");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = get(setup(), "/v3/api-docs").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "Spring Boot CRUD API");
    assert_eq!(json["paths"]["/"]["get"]["tags"][0], "Application");
    assert_eq!(json["paths"]["/health"]["get"]["summary"], "Health check");
    assert!(json["components"]["schemas"]["HealthResponse"].is_object());
}

#[tokio::test]
async fn test_openapi_document_can_be_disabled() {
    let config = Config {
        docs_enabled: false,
        ..Config::default()
    };
    let app = crud_api::create_app(&config, None);

    let response = get(app, "/v3/api-docs").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_not_mounted_without_handle() {
    let response = get(setup(), "/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_count_requests() {
    let app = crud_api::create_app(&Config::default(), Some(get_metrics_handle()));

    let response = get(app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, header::CONTENT_TYPE).starts_with("text/plain"));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(
        body.contains("http_requests_total"),
        "metrics output should include the request counter:\n{body}"
    );
}
