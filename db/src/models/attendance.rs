use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect};
use serde::Serialize;
use util::time::day_bounds;

use super::{lecture, student};

/// One accepted tap. Append-only; repeated taps for the same lecture each get a row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub lecture_id: i64,
    pub tapped_at: NaiveDateTime,
    /// Capture method reported by the reader, e.g. `NFC`.
    pub method: String,
    /// `card` or `mobile`.
    pub credential_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::LectureId",
        to = "super::lecture::Column::Id"
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

/// A row of a student's own attendance history.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct StudentHistoryRow {
    pub module_code: String,
    pub module_name: String,
    pub tapped_at: NaiveDateTime,
    pub method: String,
}

/// A row of a lecture's attendee list.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct AttendeeRow {
    pub student_name: String,
    pub tapped_at: NaiveDateTime,
    pub method: String,
    pub credential_type: String,
}

/// A fully joined attendance row for the JSON listing.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct AttendanceEntry {
    pub lecture_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub module_code: String,
    pub module_name: String,
    pub tapped_at: NaiveDateTime,
    pub method: String,
    pub credential_type: String,
}

/// Optional narrowing for [`Model::search`]. Dates are inclusive on the tap date.
#[derive(Clone, Debug, Default)]
pub struct AttendanceFilter {
    pub lecture_id: Option<i64>,
    pub student_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Model {
    /// Appends an attendance row. No duplicate check is made.
    pub async fn record(
        db: &DatabaseConnection,
        student_id: i64,
        lecture_id: i64,
        tapped_at: NaiveDateTime,
        method: &str,
        credential_type: &str,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            student_id: Set(student_id),
            lecture_id: Set(lecture_id),
            tapped_at: Set(tapped_at),
            method: Set(method.to_owned()),
            credential_type: Set(credential_type.to_owned()),
        }
        .insert(db)
        .await
    }

    pub async fn count_for_lecture(db: &DatabaseConnection, lecture_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::LectureId.eq(lecture_id))
            .count(db)
            .await
    }

    /// Number of distinct lectures the student has at least one tap for.
    pub async fn attended_lecture_count(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::LectureId)
            .distinct()
            .filter(Column::StudentId.eq(student_id))
            .count(db)
            .await
    }

    /// The student's taps, newest first.
    pub async fn history_for_student(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<StudentHistoryRow>, DbErr> {
        Entity::find()
            .select_only()
            .column_as(lecture::Column::ModuleCode, "module_code")
            .column_as(lecture::Column::ModuleName, "module_name")
            .column(Column::TappedAt)
            .column(Column::Method)
            .inner_join(lecture::Entity)
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::TappedAt)
            .order_by_desc(Column::Id)
            .into_model::<StudentHistoryRow>()
            .all(db)
            .await
    }

    /// Everyone who tapped for the lecture, in tap order.
    pub async fn attendees_for_lecture(
        db: &DatabaseConnection,
        lecture_id: i64,
    ) -> Result<Vec<AttendeeRow>, DbErr> {
        Entity::find()
            .select_only()
            .column_as(student::Column::Name, "student_name")
            .column(Column::TappedAt)
            .column(Column::Method)
            .column(Column::CredentialType)
            .inner_join(student::Entity)
            .filter(Column::LectureId.eq(lecture_id))
            .order_by_asc(Column::TappedAt)
            .order_by_asc(Column::Id)
            .into_model::<AttendeeRow>()
            .all(db)
            .await
    }

    /// Joined attendance listing, newest first.
    pub async fn search(
        db: &DatabaseConnection,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceEntry>, DbErr> {
        let mut query = Entity::find()
            .select_only()
            .column(Column::LectureId)
            .column(Column::StudentId)
            .column_as(student::Column::Name, "student_name")
            .column_as(lecture::Column::ModuleCode, "module_code")
            .column_as(lecture::Column::ModuleName, "module_name")
            .column(Column::TappedAt)
            .column(Column::Method)
            .column(Column::CredentialType)
            .inner_join(student::Entity)
            .inner_join(lecture::Entity);

        if let Some(id) = filter.lecture_id {
            query = query.filter(Column::LectureId.eq(id));
        }
        if let Some(id) = filter.student_id {
            query = query.filter(Column::StudentId.eq(id));
        }
        if let Some(day) = filter.start_date {
            query = query.filter(Column::TappedAt.gte(day_bounds(day).0));
        }
        if let Some(day) = filter.end_date {
            query = query.filter(Column::TappedAt.lt(day_bounds(day).1));
        }

        query
            .order_by_desc(Column::TappedAt)
            .order_by_desc(Column::Id)
            .into_model::<AttendanceEntry>()
            .all(db)
            .await
    }
}
