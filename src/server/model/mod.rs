//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry already validated values.

pub mod course;
pub mod course_type;
pub mod university;
