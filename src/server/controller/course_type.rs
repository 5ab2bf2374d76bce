use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        course_type::{CourseTypeDto, CreateCourseTypeDto, UpdateCourseTypeDto},
    },
    server::{
        error::AppError,
        model::course_type::{CourseType, CreateCourseTypeParam, UpdateCourseTypeParam},
        service::course_type::CourseTypeService,
        state::AppState,
        util::parse::{parse_id, INVALID_ID},
    },
};

/// Tag for grouping course type endpoints in OpenAPI documentation
pub static COURSE_TYPE_TAG: &str = "course_type";

/// Create a new course type.
///
/// The name is trimmed, HTML-escaped and must be unique.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Course type creation data
///
/// # Returns
/// - `201 Created` - Successfully created course type
/// - `400 Bad Request` - Invalid name, name already taken, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/course-types",
    tag = COURSE_TYPE_TAG,
    request_body = CreateCourseTypeDto,
    responses(
        (status = 201, description = "Successfully created course type", body = ApiResponse<CourseTypeDto>),
        (status = 400, description = "Invalid course type data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course_type(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseTypeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCourseTypeParam::from_dto(payload)?;

    let course_type = CourseTypeService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(course_type.into_dto())),
    ))
}

/// List all course types.
///
/// # Returns
/// - `200 OK` - Every course type, oldest first, with a count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/course-types",
    tag = COURSE_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved course types", body = ApiResponse<Vec<CourseTypeDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let course_types = CourseTypeService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            course_types.into_iter().map(CourseType::into_dto).collect(),
        )),
    ))
}

/// Get a course type by ID.
///
/// # Returns
/// - `200 OK` - The course type
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No course type with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/course-types/{id}",
    tag = COURSE_TYPE_TAG,
    params(
        ("id" = String, Path, description = "Course type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course type", body = ApiResponse<CourseTypeDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Course type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    let course_type = CourseTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course_type.into_dto()))))
}

/// Update a course type's name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Course type ID to update
/// - `payload` - Replacement course type data
///
/// # Returns
/// - `200 OK` - Successfully updated course type
/// - `400 Bad Request` - Malformed ID, invalid name, name already taken, or malformed body
/// - `404 Not Found` - No course type with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/course-types/{id}",
    tag = COURSE_TYPE_TAG,
    params(
        ("id" = String, Path, description = "Course type ID")
    ),
    request_body = UpdateCourseTypeDto,
    responses(
        (status = 200, description = "Successfully updated course type", body = ApiResponse<CourseTypeDto>),
        (status = 400, description = "Invalid course type data", body = ErrorDto),
        (status = 404, description = "Course type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCourseTypeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;
    let Json(payload) = payload?;
    let param = UpdateCourseTypeParam::from_dto(id, payload)?;

    let course_type = CourseTypeService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course_type.into_dto()))))
}

/// Delete a course type.
///
/// Courses referencing the course type are kept and show it as `null`.
///
/// # Returns
/// - `200 OK` - Successfully deleted course type
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No course type with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/course-types/{id}",
    tag = COURSE_TYPE_TAG,
    params(
        ("id" = String, Path, description = "Course type ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course type", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Course type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    CourseTypeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(EmptyDto {}))))
}
