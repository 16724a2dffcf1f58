use db::models::{attendance::StudentHistoryRow, lecture::LectureWithRoom, student};

use super::{clock, escape, layout, stamp};

/// Everything the student dashboard shows.
pub struct StudentDashboard {
    pub student: student::Model,
    pub upcoming: Vec<LectureWithRoom>,
    pub history: Vec<StudentHistoryRow>,
    pub attendance_rate: u64,
}

pub fn dashboard(view: &StudentDashboard) -> String {
    let upcoming = if view.upcoming.is_empty() {
        r#"<p class="empty">No lectures today.</p>"#.to_string()
    } else {
        let rows: String = view
            .upcoming
            .iter()
            .map(|l| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} - {}</td></tr>\n",
                    escape(&l.module_code),
                    escape(&l.module_name),
                    escape(&l.room_name),
                    clock(&l.start_time),
                    clock(&l.end_time),
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Module</th><th>Title</th><th>Room</th><th>Time</th></tr>\n{rows}</table>"
        )
    };

    let history = if view.history.is_empty() {
        r#"<p class="empty">No attendance recorded yet.</p>"#.to_string()
    } else {
        let rows: String = view
            .history
            .iter()
            .map(|a| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&a.module_code),
                    escape(&a.module_name),
                    stamp(&a.tapped_at),
                    escape(&a.method),
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Module</th><th>Title</th><th>Tapped at</th><th>Method</th></tr>\n{rows}</table>"
        )
    };

    let content = format!(
        r#"<h1>{name}</h1>
<p>Attendance rate</p>
<p class="rate" id="attendance-rate">{rate}%</p>
<h2>Today's lectures</h2>
{upcoming}
<h2>Attendance history</h2>
{history}"#,
        name = escape(&view.student.name),
        rate = view.attendance_rate,
    );
    layout(&view.student.name, &content)
}
