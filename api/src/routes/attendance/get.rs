use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::attendance;
use util::state::AppState;

use super::common::{AttendanceItem, ListQuery};
use crate::response::ApiResponse;

/// GET `/api/attendance`
///
/// Lists recorded taps, newest first, joined with student and lecture details.
///
/// ### Query Parameters
/// - `lecture_id` (optional)
/// - `student_id` (optional)
/// - `start_date`, `end_date` (optional, `YYYY-MM-DD`, inclusive on the tap date)
///
/// ### Responses
/// - `200 OK` with `data` as an array of entries
/// - `400 Bad Request` for an unparseable date
/// - `500 Internal Server Error` on database failure
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let filter = match query.into_filter() {
        Ok(f) => f,
        Err(param) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Vec<AttendanceItem>>::error(format!(
                    "Invalid {param}, expected YYYY-MM-DD"
                ))),
            );
        }
    };

    match attendance::Model::search(state.db(), &filter).await {
        Ok(rows) => {
            let items: Vec<AttendanceItem> = rows.into_iter().map(AttendanceItem::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Attendance retrieved")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "attendance listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve attendance")),
            )
        }
    }
}
