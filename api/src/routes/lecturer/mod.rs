use axum::{Router, routing::get};
use util::state::AppState;

mod common;
mod get;

pub use common::{CSV_HEADER, ReportQuery, attendance_csv};
pub use get::{lecturer_dashboard, lecturer_report, lecturer_report_csv};

pub fn lecturer_routes() -> Router<AppState> {
    Router::new()
        .route("/lecturer/{lecturer_id}", get(lecturer_dashboard))
        .route("/lecturer/{lecturer_id}/report", get(lecturer_report))
        .route("/lecturer/{lecturer_id}/report.csv", get(lecturer_report_csv))
}
