use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        university::{CreateUniversityDto, UniversityDto, UpdateUniversityDto},
    },
    server::{
        error::AppError,
        model::university::{CreateUniversityParam, University, UpdateUniversityParam},
        service::university::UniversityService,
        state::AppState,
        util::parse::{parse_id, INVALID_ID},
    },
};

/// Tag for grouping university endpoints in OpenAPI documentation
pub static UNIVERSITY_TAG: &str = "university";

/// Create a new university.
///
/// The name is trimmed, HTML-escaped and must be unique.
///
/// # Returns
/// - `201 Created` - Successfully created university
/// - `400 Bad Request` - Invalid name, name already taken, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/universities",
    tag = UNIVERSITY_TAG,
    request_body = CreateUniversityDto,
    responses(
        (status = 201, description = "Successfully created university", body = ApiResponse<UniversityDto>),
        (status = 400, description = "Invalid university data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_university(
    State(state): State<AppState>,
    payload: Result<Json<CreateUniversityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateUniversityParam::from_dto(payload)?;

    let university = UniversityService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(university.into_dto())),
    ))
}

/// List all universities.
///
/// # Returns
/// - `200 OK` - Every university, oldest first, with a count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/universities",
    tag = UNIVERSITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved universities", body = ApiResponse<Vec<UniversityDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_universities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let universities = UniversityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            universities.into_iter().map(University::into_dto).collect(),
        )),
    ))
}

/// Get a university by ID.
///
/// # Returns
/// - `200 OK` - The university
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No university with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = String, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved university", body = ApiResponse<UniversityDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    let university = UniversityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(university.into_dto()))))
}

/// Update a university's name.
///
/// # Returns
/// - `200 OK` - Successfully updated university
/// - `400 Bad Request` - Malformed ID, invalid name, name already taken, or malformed body
/// - `404 Not Found` - No university with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = String, Path, description = "University ID")
    ),
    request_body = UpdateUniversityDto,
    responses(
        (status = 200, description = "Successfully updated university", body = ApiResponse<UniversityDto>),
        (status = 400, description = "Invalid university data", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUniversityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;
    let Json(payload) = payload?;
    let param = UpdateUniversityParam::from_dto(id, payload)?;

    let university = UniversityService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(university.into_dto()))))
}

/// Delete a university.
///
/// Course links to the university are kept and skipped when courses are populated.
///
/// # Returns
/// - `200 OK` - Successfully deleted university
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No university with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = String, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted university", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "id", INVALID_ID)?;

    UniversityService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(EmptyDto {}))))
}
