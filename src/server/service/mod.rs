//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Translating store failures into domain errors (duplicates, not found)
//! - **Orchestration**: Coordinating repository calls and reference population
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Course/university association changes run atomically

pub mod course;
pub mod course_type;
pub mod university;
