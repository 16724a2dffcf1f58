use db::models::{
    attendance::{self, AttendeeRow},
    lecture::{self, LectureDetail},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Deserialize;
use util::time::format_timestamp;

pub const CSV_HEADER: &str = "Student,Tapped At,Method,Credential";

/// `?lecture_id=` as sent by the dashboard links. Kept as text so a bad value
/// redirects like a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub lecture_id: Option<String>,
}

impl ReportQuery {
    pub fn lecture_id(&self) -> Option<i64> {
        self.lecture_id.as_deref()?.trim().parse().ok()
    }
}

/// Loads a lecture and its attendees, or `None` when the lecture does not exist or
/// belongs to another lecturer.
pub async fn load_report(
    db: &DatabaseConnection,
    lecturer_id: i64,
    query: &ReportQuery,
) -> Result<Option<(LectureDetail, Vec<AttendeeRow>)>, DbErr> {
    let Some(lecture_id) = query.lecture_id() else {
        return Ok(None);
    };
    let Some(lecture) = lecture::Model::find_owned(db, lecture_id, lecturer_id).await? else {
        return Ok(None);
    };
    let attendees = attendance::Model::attendees_for_lecture(db, lecture_id).await?;
    Ok(Some((lecture, attendees)))
}

fn esc(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Renders attendee rows as CSV, header first, rows in the given order.
pub fn attendance_csv(rows: &[AttendeeRow]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push_str("\r\n");

    for r in rows {
        let row = format!(
            "{},{},{},{}\r\n",
            esc(&r.student_name),
            esc(&format_timestamp(&r.tapped_at)),
            esc(&r.method),
            esc(&r.credential_type),
        );
        csv.push_str(&row);
    }
    csv
}
