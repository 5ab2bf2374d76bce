//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories write
//! straight to the database, bypassing the application's validation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let course_type = factory::create_course_type(&db).await?;
//! let university = factory::create_university(&db).await?;
//! let course = factory::course::CourseFactory::new(&db, course_type.id)
//!     .name("Climate Change Solutions")
//!     .university(university.id)
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod course_type;
pub mod helpers;
pub mod university;

// Re-export commonly used factory functions for concise usage
pub use course::create_course;
pub use course_type::create_course_type;
pub use university::create_university;
