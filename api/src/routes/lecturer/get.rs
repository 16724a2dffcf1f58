//! Lecturer pages: today's dashboard, per-lecture report and its CSV export.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use db::models::{attendance, lecture, lecturer};
use sea_orm::EntityTrait;
use util::{state::AppState, time};

use super::common::{ReportQuery, attendance_csv, load_report};
use crate::{
    error::AppError,
    views::{self, lecturer::LecturerDashboard},
};

/// GET `/lecturer/{lecturer_id}`
///
/// Today's lectures for the lecturer, with room names and tap counts.
/// Unknown lecturers are sent back to `/`.
pub async fn lecturer_dashboard(
    State(state): State<AppState>,
    Path(lecturer_id): Path<i64>,
) -> Result<Response, AppError> {
    let db = state.db();

    let Some(lecturer) = lecturer::Entity::find_by_id(lecturer_id).one(db).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let todays = lecture::Model::for_lecturer_on(db, lecturer_id, time::today()).await?;
    let mut lectures = Vec::with_capacity(todays.len());
    for l in todays {
        let count = attendance::Model::count_for_lecture(db, l.id).await?;
        lectures.push((l, count));
    }

    let view = LecturerDashboard { lecturer, lectures };
    Ok(Html(views::lecturer::dashboard(&view)).into_response())
}

/// GET `/lecturer/{lecturer_id}/report?lecture_id=`
///
/// Attendee list for one of the lecturer's lectures, in tap order.
/// A missing, unknown or foreign lecture redirects to the lecturer dashboard.
pub async fn lecturer_report(
    State(state): State<AppState>,
    Path(lecturer_id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let Some((lecture, attendees)) = load_report(state.db(), lecturer_id, &query).await? else {
        return Ok(Redirect::to(&format!("/lecturer/{lecturer_id}")).into_response());
    };

    Ok(Html(views::report::report_page(&lecture, &attendees)).into_response())
}

/// GET `/lecturer/{lecturer_id}/report.csv?lecture_id=`
///
/// Same data as the report page as a `text/csv` attachment named
/// `lecture-{lecture_id}-attendance.csv`, columns `Student,Tapped At,Method,Credential`.
pub async fn lecturer_report_csv(
    State(state): State<AppState>,
    Path(lecturer_id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let Some((lecture, attendees)) = load_report(state.db(), lecturer_id, &query).await? else {
        return Ok(Redirect::to(&format!("/lecturer/{lecturer_id}")).into_response());
    };

    let filename = format!("lecture-{}-attendance.csv", lecture.id);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .unwrap_or(HeaderValue::from_static("attachment")),
    );

    Ok((headers, attendance_csv(&attendees)).into_response())
}
