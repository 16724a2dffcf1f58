use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect, Select};
use serde::Serialize;
use util::time::day_bounds;

use super::{enrollment, lecturer, room};

/// A scheduled lecture: one module meeting in one room over `[start_time, end_time]`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_code: String,
    pub module_name: String,
    pub lecturer_id: i64,
    pub room_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::Id"
    )]
    Lecturer,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A lecture row joined with the name of its room.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct LectureWithRoom {
    pub id: i64,
    pub module_code: String,
    pub module_name: String,
    pub lecturer_id: i64,
    pub room_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub room_name: String,
}

/// A lecture row joined with its room and lecturer names, as shown on the report page.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct LectureDetail {
    pub id: i64,
    pub module_code: String,
    pub module_name: String,
    pub lecturer_id: i64,
    pub room_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub room_name: String,
    pub lecturer_name: String,
}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        module_code: &str,
        module_name: &str,
        lecturer_id: i64,
        room_id: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            module_code: Set(module_code.to_owned()),
            module_name: Set(module_name.to_owned()),
            lecturer_id: Set(lecturer_id),
            room_id: Set(room_id),
            start_time: Set(start_time),
            end_time: Set(end_time),
        }
        .insert(db)
        .await
    }

    fn with_room_on(day: NaiveDate) -> Select<Entity> {
        let (from, until) = day_bounds(day);
        Entity::find()
            .column_as(room::Column::Name, "room_name")
            .inner_join(room::Entity)
            .filter(Column::StartTime.gte(from))
            .filter(Column::StartTime.lt(until))
            .order_by_asc(Column::StartTime)
    }

    /// Lectures starting on `day` that the student is enrolled in.
    pub async fn for_student_on(
        db: &DatabaseConnection,
        student_id: i64,
        day: NaiveDate,
    ) -> Result<Vec<LectureWithRoom>, DbErr> {
        Self::with_room_on(day)
            .inner_join(enrollment::Entity)
            .filter(enrollment::Column::StudentId.eq(student_id))
            .into_model::<LectureWithRoom>()
            .all(db)
            .await
    }

    /// Lectures starting on `day` that the lecturer teaches.
    pub async fn for_lecturer_on(
        db: &DatabaseConnection,
        lecturer_id: i64,
        day: NaiveDate,
    ) -> Result<Vec<LectureWithRoom>, DbErr> {
        Self::with_room_on(day)
            .filter(Column::LecturerId.eq(lecturer_id))
            .into_model::<LectureWithRoom>()
            .all(db)
            .await
    }

    /// Loads a lecture only if it is owned by `lecturer_id`.
    pub async fn find_owned(
        db: &DatabaseConnection,
        lecture_id: i64,
        lecturer_id: i64,
    ) -> Result<Option<LectureDetail>, DbErr> {
        Entity::find()
            .column_as(room::Column::Name, "room_name")
            .column_as(lecturer::Column::Name, "lecturer_name")
            .inner_join(room::Entity)
            .inner_join(lecturer::Entity)
            .filter(Column::Id.eq(lecture_id))
            .filter(lecturer::Column::Id.eq(lecturer_id))
            .into_model::<LectureDetail>()
            .one(db)
            .await
    }

    /// The lecture in session at `at` in the room bound to `reader_id`.
    ///
    /// Both interval ends are inclusive.
    pub async fn in_session(
        db: &DatabaseConnection,
        reader_id: &str,
        at: NaiveDateTime,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .inner_join(room::Entity)
            .filter(room::Column::ReaderId.eq(reader_id))
            .filter(Column::StartTime.lte(at))
            .filter(Column::EndTime.gte(at))
            .order_by_asc(Column::StartTime)
            .one(db)
            .await
    }
}
