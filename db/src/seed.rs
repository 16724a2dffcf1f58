//! Demo fixture loaded on first start.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};

use crate::models::{enrollment, lecture, lecturer, room, student};

const STUDENTS: [(i64, &str, &str, &str); 3] = [
    (1, "Aoife O'Brien", "04A1B2C3D4", "mtu-token-aoife"),
    (2, "Declan Murphy", "0499AA77BB", "mtu-token-declan"),
    (3, "Niamh Kelly", "04DEADBEEF", "mtu-token-niamh"),
];

const LECTURERS: [(i64, &str); 2] = [(1, "Dr. Sean Walsh"), (2, "Prof. Ciara O'Sullivan")];

const ROOMS: [(i64, &str, &str); 2] = [(1, "IT101", "reader-it101"), (2, "Eng202", "reader-eng202")];

/// (id, code, name, lecturer, room, start hour, end hour)
const LECTURES: [(i64, &str, &str, i64, i64, u32, u32); 2] = [
    (1, "CS401", "Distributed Systems", 1, 1, 9, 10),
    (2, "EE305", "Embedded Design", 2, 2, 11, 12),
];

/// (student, lecture)
const ENROLLMENTS: [(i64, i64); 4] = [(1, 1), (2, 1), (2, 2), (3, 2)];

/// Inserts the fixture when the `students` table is empty.
///
/// Lectures are dated on `day`. Returns whether anything was inserted.
pub async fn seed_if_empty(db: &DatabaseConnection, day: NaiveDate) -> Result<bool, DbErr> {
    if student::Entity::find().count(db).await? > 0 {
        tracing::debug!("students present, skipping seed");
        return Ok(false);
    }

    let txn = db.begin().await?;

    student::Entity::insert_many(STUDENTS.map(|(id, name, card, token)| student::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        card_uid: Set(Some(card.to_owned())),
        mobile_token: Set(Some(token.to_owned())),
    }))
    .exec_without_returning(&txn)
    .await?;

    lecturer::Entity::insert_many(LECTURERS.map(|(id, name)| lecturer::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }))
    .exec_without_returning(&txn)
    .await?;

    room::Entity::insert_many(ROOMS.map(|(id, name, reader)| room::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        reader_id: Set(reader.to_owned()),
    }))
    .exec_without_returning(&txn)
    .await?;

    let hour = |h: u32| day.and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN));
    lecture::Entity::insert_many(LECTURES.map(
        |(id, code, name, lecturer_id, room_id, start, end)| lecture::ActiveModel {
            id: Set(id),
            module_code: Set(code.to_owned()),
            module_name: Set(name.to_owned()),
            lecturer_id: Set(lecturer_id),
            room_id: Set(room_id),
            start_time: Set(hour(start)),
            end_time: Set(hour(end)),
        },
    ))
    .exec_without_returning(&txn)
    .await?;

    enrollment::Entity::insert_many(ENROLLMENTS.map(|(student_id, lecture_id)| {
        enrollment::ActiveModel {
            student_id: Set(student_id),
            lecture_id: Set(lecture_id),
        }
    }))
    .exec_without_returning(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(
        students = STUDENTS.len(),
        lectures = LECTURES.len(),
        %day,
        "seeded demo data"
    );
    Ok(true)
}
