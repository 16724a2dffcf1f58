use axum::{extract::State, response::Html};
use db::models::{lecturer, student};
use util::state::AppState;

use crate::{error::AppError, views};

/// GET `/`
///
/// Role selection page listing all students and lecturers by name.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let db = state.db();
    let students = student::Model::all_by_name(db).await?;
    let lecturers = lecturer::Model::all_by_name(db).await?;

    Ok(Html(views::home::login_page(&students, &lecturers)))
}
