use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

use super::lecture;

/// Membership of a student in a lecture. Keyed by the pair; carries no payload.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub lecture_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::LectureId",
        to = "super::lecture::Column::Id",
        on_delete = "Cascade"
    )]
    Lecture,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        student_id: i64,
        lecture_id: i64,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            lecture_id: Set(lecture_id),
        }
        .insert(db)
        .await
    }

    /// Number of sessions the student is enrolled in, counting only lectures that exist.
    pub async fn session_count_for_student(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .inner_join(lecture::Entity)
            .filter(Column::StudentId.eq(student_id))
            .count(db)
            .await
    }
}
