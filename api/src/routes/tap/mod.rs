use axum::{Router, routing::post};
use util::state::AppState;

mod common;
mod post;

pub use common::{TapRejection, TapRequest, TapResponse, resolve_tap};
pub use post::tap;

pub fn tap_routes() -> Router<AppState> {
    Router::new().route("/tap", post(tap))
}
