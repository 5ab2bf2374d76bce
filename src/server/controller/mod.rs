//! HTTP request handlers.
//!
//! Handlers extract path, query and body data, turn it into validated parameters,
//! call the matching service and wrap the result in the `ApiResponse` envelope.
//! Request bodies and query strings are taken as `Result<_, Rejection>` so malformed
//! input is reported through `AppError` like every other failure.

pub mod course;
pub mod course_type;
pub mod health;
pub mod university;

#[cfg(test)]
mod test;
