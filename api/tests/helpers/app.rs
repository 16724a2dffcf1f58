use axum::{Router, body::Body, response::Response};
use chrono::NaiveDate;
use db::{seed_if_empty, test_utils::setup_test_db};
use serde_json::Value;
use util::{state::AppState, time};

/// Full application over an empty in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    (api::app(app_state.clone()), app_state)
}

/// Full application over the demo fixture, with lectures dated today.
pub async fn make_seeded_app() -> (Router, AppState, NaiveDate) {
    let (app, app_state) = make_test_app().await;
    let today = time::today();
    seed_if_empty(app_state.db(), today)
        .await
        .expect("Failed to seed fixture");
    (app, app_state, today)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
