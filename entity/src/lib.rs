//! SeaORM entity definitions for the course catalog schema.

pub mod prelude;

pub mod course;
pub mod course_type;
pub mod course_university;
pub mod university;
