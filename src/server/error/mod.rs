//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON error envelope. The `AppError` enum serves as the
//! top-level error type returned by services and controllers and implements
//! `IntoResponse` so that every failure is converted at the request boundary.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::config::ConfigError, validation::FieldError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// A path or query identifier is not a well-formed ID.
    ///
    /// Results in 400 Bad Request, reported in the same shape as `Validation`.
    #[error("{}", .0.message)]
    InvalidIdentifier(FieldError),

    /// A unique field collides with an existing record.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    DuplicateKey(String),

    /// The university is already linked to the course.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    DuplicateAssociation(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, e.g. a body that is not valid JSON or an unparsable query string.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Replaces a unique constraint violation with `on_violation`.
    ///
    /// Any other database error is kept as `AppError::DbErr`.
    ///
    /// # Arguments
    /// - `err` - Error returned by an insert or update
    /// - `on_violation` - Domain error to report when a unique key collided
    pub fn or_unique_violation(err: DbErr, on_violation: AppError) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => on_violation,
            _ => AppError::DbErr(err),
        }
    }
}

impl From<TransactionError<AppError>> for AppError {
    fn from(err: TransactionError<AppError>) -> Self {
        match err {
            TransactionError::Connection(err) => AppError::DbErr(err),
            TransactionError::Transaction(err) => err,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation, identifier, duplicate and bad request errors
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::fields(
                    errors.into_iter().map(FieldError::into_dto).collect(),
                )),
            )
                .into_response(),
            Self::InvalidIdentifier(error) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::fields(vec![error.into_dto()])),
            )
                .into_response(),
            Self::DuplicateKey(msg) | Self::DuplicateAssociation(msg) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::message(msg))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::message(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::message("Internal server error")),
        )
            .into_response()
    }
}
