//! Translation of a `CourseFilter` into a SQL condition and a name matcher.

use sea_orm::{ColumnTrait, Condition};

use crate::server::model::course::CourseFilter;

/// Builds the condition selecting courses by course type.
///
/// The name filter is not part of the condition. SQLite's `LOWER` only folds ASCII,
/// so names are compared in `matches_name` after the query.
pub fn condition(filter: &CourseFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(course_type_id) = filter.course_type_id {
        condition = condition.add(entity::course::Column::CourseTypeId.eq(course_type_id));
    }

    condition
}

/// Whether `name` contains the filter's name as a literal substring, ignoring case.
///
/// Always true when the filter has no name.
pub fn matches_name(filter: &CourseFilter, name: &str) -> bool {
    match &filter.name {
        Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}
