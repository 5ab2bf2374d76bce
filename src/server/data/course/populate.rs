//! Expansion of course references into full course type and university records.

use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::{course_type::CourseTypeRepository, university::UniversityRepository},
    model::{
        course::{Course, PopulatedCourse},
        course_type::CourseType,
        university::University,
    },
};

/// Resolves course references with one lookup per referenced table.
///
/// A course type that no longer exists resolves to `None`. Universities that no
/// longer exist are dropped while the remaining ones keep their order.
pub struct CoursePopulator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoursePopulator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn populate(&self, course: Course) -> Result<PopulatedCourse, DbErr> {
        let (course_types, universities) = self.lookup(std::slice::from_ref(&course)).await?;

        Ok(resolve(course, &course_types, &universities))
    }

    /// Populates many courses, preserving their order.
    pub async fn populate_many(&self, courses: Vec<Course>) -> Result<Vec<PopulatedCourse>, DbErr> {
        let (course_types, universities) = self.lookup(&courses).await?;

        Ok(courses
            .into_iter()
            .map(|course| resolve(course, &course_types, &universities))
            .collect())
    }

    async fn lookup(
        &self,
        courses: &[Course],
    ) -> Result<(HashMap<Uuid, CourseType>, HashMap<Uuid, University>), DbErr> {
        let mut course_type_ids: Vec<Uuid> = courses.iter().map(|c| c.course_type_id).collect();
        course_type_ids.sort_unstable();
        course_type_ids.dedup();

        let mut university_ids: Vec<Uuid> = courses
            .iter()
            .flat_map(|c| c.university_ids.iter().copied())
            .collect();
        university_ids.sort_unstable();
        university_ids.dedup();

        let course_types = CourseTypeRepository::new(self.db)
            .get_by_ids(course_type_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let universities = UniversityRepository::new(self.db)
            .get_by_ids(university_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok((course_types, universities))
    }
}

fn resolve(
    course: Course,
    course_types: &HashMap<Uuid, CourseType>,
    universities: &HashMap<Uuid, University>,
) -> PopulatedCourse {
    PopulatedCourse {
        id: course.id,
        name: course.name,
        course_type: course_types.get(&course.course_type_id).cloned(),
        universities: course
            .university_ids
            .iter()
            .filter_map(|id| universities.get(id).cloned())
            .collect(),
        created_at: course.created_at,
        updated_at: course.updated_at,
    }
}
