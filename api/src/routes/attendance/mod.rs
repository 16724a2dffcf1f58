//! `/api/attendance` listing.

use axum::{Router, routing::get};
use util::state::AppState;

mod common;
mod get;

pub use common::{AttendanceItem, ListQuery};
pub use get::list_attendance;

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/attendance", get(list_attendance))
}
