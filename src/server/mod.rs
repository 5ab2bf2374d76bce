//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, including course/university associations
//! - **Data Layer** (`data/`) - Database operations, list filters and reference population
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Validation** (`validation`) - Field-level input sanitation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses identifiers, validates the body into params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
