use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use util::{state::AppState, time};

use super::common::{TapRequest, TapResponse, resolve_tap};

/// POST `/api/tap`
///
/// Records one attendance tap from a reader.
///
/// **Body** (JSON, content type not enforced):
/// - `credential` card UID or mobile token
/// - `credential_type` *(default `card`)*
/// - `reader_id` reader that produced the tap
/// - `method` *(default `NFC`)*
/// - `tapped_at` ISO-8601 *(default server time)*
///
/// **Responses**:
/// - `200` `{"status":"ok","student":...,"lecture_id":...}`
/// - `404` `{"status":"error","message":"Unknown credential"}`
/// - `404` `{"status":"error","message":"No lecture in session"}`
///
/// A body that is not a JSON object is treated as an empty payload. Fields are read one
/// by one, so a mistyped field does not discard the rest.
pub async fn tap(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<TapResponse>) {
    let req = TapRequest::from_body(&body);
    let reader_id = req.reader_id.clone().unwrap_or_default();

    match resolve_tap(state.db(), req, time::now()).await {
        Ok(Ok((student, record))) => {
            tracing::info!(
                student_id = student.id,
                lecture_id = record.lecture_id,
                reader_id = %reader_id,
                tapped_at = %record.tapped_at,
                "tap recorded"
            );
            (
                StatusCode::OK,
                Json(TapResponse::Ok {
                    student: student.name,
                    lecture_id: record.lecture_id,
                }),
            )
        }
        Ok(Err(rejection)) => {
            tracing::warn!(reader_id = %reader_id, reason = rejection.message(), "tap rejected");
            (
                StatusCode::NOT_FOUND,
                Json(TapResponse::error(rejection.message())),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "tap failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TapResponse::error("Failed to record attendance")),
            )
        }
    }
}
