use axum::{Form, response::Redirect};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub role: Option<String>,
    pub user_id: Option<String>,
}

/// POST `/login`
///
/// Redirects to the dashboard for the chosen role. No credential check is made.
/// `role=student` opens the student dashboard; any other role opens the lecturer one.
/// A missing or non-numeric `user_id` goes back to `/`.
pub async fn login(Form(form): Form<LoginForm>) -> Redirect {
    let Some(user_id) = form
        .user_id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
    else {
        return Redirect::to("/");
    };

    match form.role.as_deref() {
        Some("student") => Redirect::to(&format!("/student/{user_id}")),
        _ => Redirect::to(&format!("/lecturer/{user_id}")),
    }
}
