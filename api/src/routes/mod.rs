//! HTTP route entry point.
//!
//! Route groups:
//! - `/` and `/login` → role selection (HTML)
//! - `/student/{student_id}` → student dashboard (HTML)
//! - `/lecturer/{lecturer_id}` → lecturer dashboard, report page and CSV export
//! - `/api/tap` → reader tap endpoint (JSON)
//! - `/api/attendance` → attendance listing (JSON)
//! - `/api/health` → health check (JSON)
//!
//! Not-found lookups on HTML routes redirect to the nearest safe parent page.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, health::health_routes, home::home_routes,
    lecturer::lecturer_routes, student::student_routes, tap::tap_routes,
};

pub mod attendance;
pub mod health;
pub mod home;
pub mod lecturer;
pub mod student;
pub mod tap;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .nest("/health", health_routes())
        .merge(tap_routes())
        .merge(attendance_routes());

    Router::new()
        .merge(home_routes())
        .merge(student_routes())
        .merge(lecturer_routes())
        .nest("/api", api)
        .with_state(app_state)
}
