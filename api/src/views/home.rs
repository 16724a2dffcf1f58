use db::models::{lecturer, student};

use super::{escape, layout};

fn user_options<'a>(users: impl Iterator<Item = (i64, &'a str)>) -> String {
    users
        .map(|(id, name)| format!(r#"<option value="{id}">{}</option>"#, escape(name)))
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn login_form(role: &str, heading: &str, options: &str) -> String {
    format!(
        r#"<section>
  <h2>{heading}</h2>
  <form method="post" action="/login">
    <input type="hidden" name="role" value="{role}">
    <select name="user_id">
      {options}
    </select>
    <button type="submit">Open dashboard</button>
  </form>
</section>"#
    )
}

/// Role selection page listing every student and lecturer.
pub fn login_page(students: &[student::Model], lecturers: &[lecturer::Model]) -> String {
    let student_options = user_options(students.iter().map(|s| (s.id, s.name.as_str())));
    let lecturer_options = user_options(lecturers.iter().map(|l| (l.id, l.name.as_str())));

    let content = format!(
        "<h1>Campus Attendance</h1>\n{}\n{}",
        login_form("student", "Students", &student_options),
        login_form("lecturer", "Lecturers", &lecturer_options),
    );
    layout("Sign in", &content)
}
