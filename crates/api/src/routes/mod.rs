//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod root;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {method} {}", uri.path()))
}
