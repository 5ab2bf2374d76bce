//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod course;
pub mod course_type;
pub mod university;
