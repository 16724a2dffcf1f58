use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use db::models::{attendance, enrollment, lecture, student};
use sea_orm::EntityTrait;
use util::{state::AppState, time};

use super::common::attendance_rate;
use crate::{
    error::AppError,
    views::{self, student::StudentDashboard},
};

/// GET `/student/{student_id}`
///
/// Today's enrolled lectures, the full tap history (newest first) and the attendance
/// rate. Unknown students are sent back to `/`.
pub async fn student_dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Response, AppError> {
    let db = state.db();

    let Some(student) = student::Entity::find_by_id(student_id).one(db).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let upcoming = lecture::Model::for_student_on(db, student_id, time::today()).await?;
    let history = attendance::Model::history_for_student(db, student_id).await?;
    let total = enrollment::Model::session_count_for_student(db, student_id).await?;
    let attended = attendance::Model::attended_lecture_count(db, student_id).await?;

    let view = StudentDashboard {
        student,
        upcoming,
        history,
        attendance_rate: attendance_rate(attended, total),
    };
    Ok(Html(views::student::dashboard(&view)).into_response())
}
