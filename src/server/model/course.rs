//! Course domain models and parameters.
//!
//! A `Course` keeps its course type and universities as identifiers, mirroring the
//! stored record. `PopulatedCourse` carries the referenced entities themselves and is
//! produced by the populator in the data layer before most responses.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::course::{
        CourseDto, CourseFilterDto, CreateCourseDto, PopulatedCourseDto, UpdateCourseDto,
    },
    server::{
        error::AppError,
        model::{course_type::CourseType, university::University},
        util::parse::{parse_id, INVALID_COURSE_TYPE_ID},
        validation::{Validator, COURSE_NAME},
    },
};

const COURSE_TYPE_REQUIRED: &str = "Course type is required";

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub course_type_id: Uuid,
    /// University references in insertion order, without duplicates.
    pub university_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The course record
    /// - `links` - Every university link of the course, in any order
    pub fn from_entity(
        entity: entity::course::Model,
        mut links: Vec<entity::course_university::Model>,
    ) -> Self {
        links.sort_by_key(|link| link.position);

        Self {
            id: entity.id,
            name: entity.name,
            course_type_id: entity.course_type_id,
            university_ids: links.into_iter().map(|link| link.university_id).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO with references left as identifiers.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            course_type: self.course_type_id,
            universities: self.university_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Course with its references resolved.
///
/// `course_type` is `None` when the referenced course type no longer exists; missing
/// universities are dropped from `universities`.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedCourse {
    pub id: Uuid,
    pub name: String,
    pub course_type: Option<CourseType>,
    pub universities: Vec<University>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PopulatedCourse {
    pub fn into_dto(self) -> PopulatedCourseDto {
        PopulatedCourseDto {
            id: self.id,
            name: self.name,
            course_type: self.course_type.map(CourseType::into_dto),
            universities: self
                .universities
                .into_iter()
                .map(University::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for creating a course.
///
/// The course type is only checked for being a well-formed ID; it is not required to
/// exist.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub name: String,
    pub course_type_id: Uuid,
}

impl CreateCourseParam {
    /// Validates the request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCourseParam)` - Trimmed and escaped name with the parsed course type
    /// - `Err(AppError::Validation)` - One entry per failing field
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &COURSE_NAME);
        let course_type_id = validator.identifier(
            "courseType",
            dto.course_type.as_deref(),
            COURSE_TYPE_REQUIRED,
            INVALID_COURSE_TYPE_ID,
        );
        validator.finish()?;

        Ok(Self {
            name,
            course_type_id,
        })
    }
}

/// Validated parameters for replacing a course's name and course type.
///
/// Universities are not part of an update; they change only through association.
#[derive(Debug, Clone)]
pub struct UpdateCourseParam {
    pub id: Uuid,
    pub name: String,
    pub course_type_id: Uuid,
}

impl UpdateCourseParam {
    pub fn from_dto(id: Uuid, dto: UpdateCourseDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &COURSE_NAME);
        let course_type_id = validator.identifier(
            "courseType",
            dto.course_type.as_deref(),
            COURSE_TYPE_REQUIRED,
            INVALID_COURSE_TYPE_ID,
        );
        validator.finish()?;

        Ok(Self {
            id,
            name,
            course_type_id,
        })
    }
}

/// Filter applied when listing courses. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    /// Case-insensitive substring of the course name, matched literally.
    pub name: Option<String>,
    /// Exact course type reference.
    pub course_type_id: Option<Uuid>,
}

impl CourseFilter {
    /// Builds a filter from query parameters, treating empty values as absent.
    ///
    /// # Returns
    /// - `Ok(CourseFilter)` - Filter ready for the repository
    /// - `Err(AppError::InvalidIdentifier)` - `courseType` is not a well-formed ID
    pub fn from_dto(dto: CourseFilterDto) -> Result<Self, AppError> {
        let course_type_id = match dto.course_type.as_deref().filter(|v| !v.is_empty()) {
            Some(raw) => Some(parse_id(raw, "courseType", INVALID_COURSE_TYPE_ID)?),
            None => None,
        };

        Ok(Self {
            name: dto.name.filter(|v| !v.is_empty()),
            course_type_id,
        })
    }
}
