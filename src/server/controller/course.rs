use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        course::{CourseDto, CourseFilterDto, CreateCourseDto, PopulatedCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        model::course::{CourseFilter, CreateCourseParam, PopulatedCourse, UpdateCourseParam},
        service::course::CourseService,
        state::AppState,
        util::parse::{parse_id, INVALID_COURSE_ID, INVALID_ID, INVALID_UNIVERSITY_ID},
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// The course type must be a well-formed ID but is not required to exist. The new
/// course has no universities; they are linked through the association endpoints.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Course creation data (name and course type ID)
///
/// # Returns
/// - `201 Created` - Successfully created course, with references as IDs
/// - `400 Bad Request` - Invalid name or course type, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCourseParam::from_dto(payload)?;

    let course = CourseService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(course.into_dto()))))
}

/// List courses, optionally filtered.
///
/// `name` matches any course whose name contains it, ignoring case. `courseType`
/// matches courses referencing exactly that course type. Both filters combine.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional name and course type filters
///
/// # Returns
/// - `200 OK` - Matching courses with course type and universities expanded
/// - `400 Bad Request` - Malformed query string or `courseType`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(CourseFilterDto),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = ApiResponse<Vec<PopulatedCourseDto>>),
        (status = 400, description = "Invalid course type ID format", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    params: Result<Query<CourseFilterDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let filter = CourseFilter::from_dto(params)?;

    let courses = CourseService::new(&state.db).get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            courses.into_iter().map(PopulatedCourse::into_dto).collect(),
        )),
    ))
}

/// Get a course by ID with its references expanded.
///
/// # Returns
/// - `200 OK` - The course
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No course with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = ApiResponse<PopulatedCourseDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course.into_dto()))))
}

/// Replace a course's name and course type.
///
/// Linked universities are not affected.
///
/// # Returns
/// - `200 OK` - Successfully updated course, with references expanded
/// - `400 Bad Request` - Malformed ID, invalid name or course type, or malformed body
/// - `404 Not Found` - No course with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = ApiResponse<PopulatedCourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;
    let Json(payload) = payload?;
    let param = UpdateCourseParam::from_dto(id, payload)?;

    let course = CourseService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    CourseService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(EmptyDto {}))))
}

/// Link a university to a course.
///
/// The university is appended after the course's existing universities. It is not
/// required to exist; a missing university is simply left out of the expanded view.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `course_id` - Course to link the university to
/// - `university_id` - University to link
///
/// # Returns
/// - `200 OK` - The course after linking, with references expanded
/// - `400 Bad Request` - Malformed ID, or the university is already linked
/// - `404 Not Found` - No course with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/universities/{university_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ("university_id" = String, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully linked university", body = ApiResponse<PopulatedCourseDto>),
        (status = 400, description = "Invalid ID format or university already linked", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_university_to_course(
    State(state): State<AppState>,
    Path((course_id, university_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_id(&course_id, "courseId", INVALID_COURSE_ID)?;
    let university_id = parse_id(&university_id, "universityId", INVALID_UNIVERSITY_ID)?;

    let course = CourseService::new(&state.db)
        .add_university(course_id, university_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course.into_dto()))))
}

/// Unlink a university from a course.
///
/// Unlinking a university that is not linked is not an error.
///
/// # Returns
/// - `200 OK` - The course after unlinking, with references expanded
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No course with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}/universities/{university_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ("university_id" = String, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully unlinked university", body = ApiResponse<PopulatedCourseDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_university_from_course(
    State(state): State<AppState>,
    Path((course_id, university_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_id(&course_id, "courseId", INVALID_COURSE_ID)?;
    let university_id = parse_id(&university_id, "universityId", INVALID_UNIVERSITY_ID)?;

    let course = CourseService::new(&state.db)
        .remove_university(course_id, university_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course.into_dto()))))
}
