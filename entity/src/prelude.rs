pub use super::course::Entity as Course;
pub use super::course_type::Entity as CourseType;
pub use super::course_university::Entity as CourseUniversity;
pub use super::university::Entity as University;
