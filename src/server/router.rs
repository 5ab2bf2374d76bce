use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{course, course_type, health, university},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Course Catalog API",
    description = "Courses, course types and universities, and the links between courses and universities"
))]
struct ApiDoc;

/// Builds the API router with every endpoint, the Swagger UI at `/api/docs` and JSON
/// fallbacks for unknown paths and unsupported methods.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(
            course_type::create_course_type,
            course_type::get_course_types
        ))
        .routes(routes!(
            course_type::get_course_type,
            course_type::update_course_type,
            course_type::delete_course_type
        ))
        .routes(routes!(
            university::create_university,
            university::get_universities
        ))
        .routes(routes!(
            university::get_university,
            university::update_university,
            university::delete_university
        ))
        .routes(routes!(course::create_course, course::get_courses))
        .routes(routes!(
            course::get_course,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(
            course::add_university_to_course,
            course::remove_university_from_course
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .method_not_allowed_fallback(health::method_not_allowed)
        .fallback(health::not_found)
}
