use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod get;
mod post;

pub use get::index;
pub use post::{LoginForm, login};

pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", post(login))
}
