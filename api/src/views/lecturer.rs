use db::models::{lecture::LectureWithRoom, lecturer};

use super::{clock, escape, layout};

/// Everything the lecturer dashboard shows; each lecture is paired with its tap count.
pub struct LecturerDashboard {
    pub lecturer: lecturer::Model,
    pub lectures: Vec<(LectureWithRoom, u64)>,
}

pub fn dashboard(view: &LecturerDashboard) -> String {
    let lecturer_id = view.lecturer.id;
    let lectures = if view.lectures.is_empty() {
        r#"<p class="empty">No lectures today.</p>"#.to_string()
    } else {
        let rows: String = view
            .lectures
            .iter()
            .map(|(l, count)| {
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{} - {}</td><td>{count}</td><td><a href="/lecturer/{lecturer_id}/report?lecture_id={id}">Report</a></td></tr>
"#,
                    escape(&l.module_code),
                    escape(&l.module_name),
                    escape(&l.room_name),
                    clock(&l.start_time),
                    clock(&l.end_time),
                    id = l.id,
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Module</th><th>Title</th><th>Room</th><th>Time</th><th>Taps</th><th></th></tr>\n{rows}</table>"
        )
    };

    let content = format!(
        "<h1>{name}</h1>\n<h2>Today's lectures</h2>\n{lectures}",
        name = escape(&view.lecturer.name),
    );
    layout(&view.lecturer.name, &content)
}
