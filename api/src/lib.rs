pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod views;

use axum::{Router, middleware::from_fn};
use util::state::AppState;

/// The complete service: every route plus request logging.
pub fn app(app_state: AppState) -> Router {
    routes::routes(app_state).layer(from_fn(middleware::log_request))
}
