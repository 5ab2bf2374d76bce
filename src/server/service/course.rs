//! Course business logic, including the course/university association rules.

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::course::{populate::CoursePopulator, CourseRepository},
    error::AppError,
    model::course::{
        Course, CourseFilter, CreateCourseParam, PopulatedCourse, UpdateCourseParam,
    },
};

const NOT_FOUND: &str = "Course not found";
const ALREADY_ASSOCIATED: &str = "University already associated with this course";

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND.to_string())
}

fn already_associated() -> AppError {
    AppError::DuplicateAssociation(ALREADY_ASSOCIATED.to_string())
}

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course without universities.
    ///
    /// The course type is stored as given; it is not required to exist.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course with its references as IDs
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db).create(param).await?;

        tracing::info!("Created course {} ({})", course.name, course.id);

        Ok(course)
    }

    /// Gets all courses matching the filter with their references populated.
    pub async fn get_all(&self, filter: CourseFilter) -> Result<Vec<PopulatedCourse>, AppError> {
        let courses = CourseRepository::new(self.db).get_all(&filter).await?;

        tracing::debug!("Listed {} courses for {:?}", courses.len(), filter);

        Ok(CoursePopulator::new(self.db).populate_many(courses).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PopulatedCourse, AppError> {
        let course = CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        Ok(CoursePopulator::new(self.db).populate(course).await?)
    }

    /// Replaces a course's name and course type, leaving universities untouched.
    ///
    /// # Returns
    /// - `Ok(PopulatedCourse)` - The updated course
    /// - `Err(AppError::NotFound)` - No course with the given ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateCourseParam) -> Result<PopulatedCourse, AppError> {
        let course = CourseRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Updated course {}", course.id);

        Ok(CoursePopulator::new(self.db).populate(course).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !CourseRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted course {}", id);

        Ok(())
    }

    /// Links a university to the end of a course's university list.
    ///
    /// The existence check, insert and timestamp bump run in one transaction. A
    /// concurrent request linking the same university loses on the link table's primary
    /// key and gets the same error as the existence check. The university itself is
    /// not required to exist.
    ///
    /// # Returns
    /// - `Ok(PopulatedCourse)` - The course after linking
    /// - `Err(AppError::NotFound)` - No course with the given ID
    /// - `Err(AppError::DuplicateAssociation)` - The university is already linked
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_university(
        &self,
        course_id: Uuid,
        university_id: Uuid,
    ) -> Result<PopulatedCourse, AppError> {
        let course = self
            .db
            .transaction::<_, Course, AppError>(|txn| {
                Box::pin(async move {
                    let repo = CourseRepository::new(txn);

                    let course = repo.get_by_id(course_id).await?.ok_or_else(not_found)?;
                    if course.university_ids.contains(&university_id) {
                        return Err(already_associated());
                    }

                    repo.append_university(course_id, university_id)
                        .await
                        .map_err(|e| AppError::or_unique_violation(e, already_associated()))?;
                    repo.touch(course_id).await?;

                    repo.get_by_id(course_id).await?.ok_or_else(not_found)
                })
            })
            .await?;

        tracing::info!("Linked university {} to course {}", university_id, course_id);

        Ok(CoursePopulator::new(self.db).populate(course).await?)
    }

    /// Unlinks a university from a course.
    ///
    /// Unlinking a university that is not linked succeeds and still bumps the
    /// course's `updated_at`.
    ///
    /// # Returns
    /// - `Ok(PopulatedCourse)` - The course after unlinking
    /// - `Err(AppError::NotFound)` - No course with the given ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_university(
        &self,
        course_id: Uuid,
        university_id: Uuid,
    ) -> Result<PopulatedCourse, AppError> {
        let (course, removed) = self
            .db
            .transaction::<_, (Course, bool), AppError>(|txn| {
                Box::pin(async move {
                    let repo = CourseRepository::new(txn);

                    if repo.get_by_id(course_id).await?.is_none() {
                        return Err(not_found());
                    }

                    let removed = repo.remove_university(course_id, university_id).await?;
                    repo.touch(course_id).await?;

                    let course = repo.get_by_id(course_id).await?.ok_or_else(not_found)?;
                    Ok((course, removed))
                })
            })
            .await?;

        if removed {
            tracing::info!("Unlinked university {} from course {}", university_id, course_id);
        }

        Ok(CoursePopulator::new(self.db).populate(course).await?)
    }
}
