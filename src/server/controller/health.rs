use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::{ErrorDto, HealthDto};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - The server is running
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        success: true,
        message: "Course catalog API is running".to_string(),
        timestamp: Utc::now(),
    })
}

/// Fallback for requests that match no route.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::message("Endpoint not found")),
    )
}

/// Fallback for requests whose path matches a route but whose method does not.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto::message("Method not allowed")),
    )
}
