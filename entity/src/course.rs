use sea_orm::entity::prelude::*;

/// A course record.
///
/// `course_type_id` intentionally carries no foreign key: deleting a course type
/// leaves the reference dangling.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(indexed)]
    pub course_type_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_university::Entity")]
    CourseUniversity,
}

impl Related<super::course_university::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUniversity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
