use axum::{Router, routing::get};
use util::state::AppState;

mod common;
mod get;

pub use common::attendance_rate;
pub use get::student_dashboard;

pub fn student_routes() -> Router<AppState> {
    Router::new().route("/student/{student_id}", get(student_dashboard))
}
