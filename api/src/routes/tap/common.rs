use chrono::NaiveDateTime;
use db::models::{attendance, lecture, student};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use serde_json::Value;
use util::time::parse_timestamp;

pub const DEFAULT_CREDENTIAL_TYPE: &str = "card";
pub const DEFAULT_METHOD: &str = "NFC";

/// Body of `POST /api/tap`. Every field is optional on the wire; missing required
/// fields surface as lookup failures.
#[derive(Debug, Default)]
pub struct TapRequest {
    pub credential: Option<String>,
    pub credential_type: Option<String>,
    pub reader_id: Option<String>,
    pub method: Option<String>,
    pub tapped_at: Option<String>,
}

impl TapRequest {
    /// Reads each field independently from a JSON object.
    ///
    /// A body that is not JSON, or not an object, yields an empty request. A field of the
    /// wrong type counts as absent, except `tapped_at`, which keeps its JSON text so that it
    /// fails to parse instead of defaulting to now.
    pub fn from_body(body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_owned);

        let tapped_at = match payload.get("tapped_at") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Self {
            credential: text("credential"),
            credential_type: text("credential_type"),
            reader_id: text("reader_id"),
            method: text("method"),
            tapped_at,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TapResponse {
    Ok { student: String, lecture_id: i64 },
    Error { message: String },
}

impl TapResponse {
    pub fn error(message: impl Into<String>) -> Self {
        TapResponse::Error {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapRejection {
    UnknownCredential,
    NoLectureInSession,
}

impl TapRejection {
    pub fn message(self) -> &'static str {
        match self {
            TapRejection::UnknownCredential => "Unknown credential",
            TapRejection::NoLectureInSession => "No lecture in session",
        }
    }
}

/// Resolves a tap to a student and the lecture in session, then appends one attendance row.
///
/// `now` stands in for a missing or blank `tapped_at`. A `tapped_at` that cannot be parsed
/// matches no lecture. The caller-supplied time is trusted as-is.
pub async fn resolve_tap(
    db: &DatabaseConnection,
    req: TapRequest,
    now: NaiveDateTime,
) -> Result<Result<(student::Model, attendance::Model), TapRejection>, DbErr> {
    let credential = req.credential.unwrap_or_default();
    let Some(student) = student::Model::find_by_credential(db, &credential).await? else {
        return Ok(Err(TapRejection::UnknownCredential));
    };

    let tapped_at = match req.tapped_at.as_deref().map(str::trim) {
        None | Some("") => Some(now),
        Some(raw) => parse_timestamp(raw),
    };
    let (Some(reader_id), Some(tapped_at)) = (req.reader_id.as_deref(), tapped_at) else {
        return Ok(Err(TapRejection::NoLectureInSession));
    };
    let Some(lecture) = lecture::Model::in_session(db, reader_id, tapped_at).await? else {
        return Ok(Err(TapRejection::NoLectureInSession));
    };

    let record = attendance::Model::record(
        db,
        student.id,
        lecture.id,
        tapped_at,
        req.method.as_deref().unwrap_or(DEFAULT_METHOD),
        req.credential_type
            .as_deref()
            .unwrap_or(DEFAULT_CREDENTIAL_TYPE),
    )
    .await?;

    Ok(Ok((student, record)))
}
