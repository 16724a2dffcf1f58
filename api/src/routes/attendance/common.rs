use chrono::NaiveDate;
use db::models::attendance::{AttendanceEntry, AttendanceFilter};
use serde::{Deserialize, Serialize};
use util::time::format_timestamp;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub lecture_id: Option<i64>,
    pub student_id: Option<i64>,
    /// `YYYY-MM-DD`, inclusive.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: Option<String>,
}

impl ListQuery {
    /// Converts the raw query into a repository filter.
    ///
    /// Blank dates are ignored. Returns the offending parameter name when a date does not parse.
    pub fn into_filter(self) -> Result<AttendanceFilter, &'static str> {
        Ok(AttendanceFilter {
            lecture_id: self.lecture_id,
            student_id: self.student_id,
            start_date: parse_date(self.start_date.as_deref()).map_err(|_| "start_date")?,
            end_date: parse_date(self.end_date.as_deref()).map_err(|_| "end_date")?,
        })
    }
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some),
    }
}

#[derive(Debug, Serialize)]
pub struct AttendanceItem {
    pub lecture_id: i64,
    pub student_id: i64,
    pub student: String,
    pub module_code: String,
    pub module_name: String,
    pub tapped_at: String,
    pub method: String,
    pub credential_type: String,
}

impl From<AttendanceEntry> for AttendanceItem {
    fn from(e: AttendanceEntry) -> Self {
        Self {
            lecture_id: e.lecture_id,
            student_id: e.student_id,
            student: e.student_name,
            module_code: e.module_code,
            module_name: e.module_name,
            tapped_at: format_timestamp(&e.tapped_at),
            method: e.method,
            credential_type: e.credential_type,
        }
    }
}
