use db::models::{attendance::AttendeeRow, lecture::LectureDetail};

use super::{clock, escape, layout, stamp};

pub fn report_page(lecture: &LectureDetail, attendees: &[AttendeeRow]) -> String {
    let table = if attendees.is_empty() {
        r#"<p class="empty">Nobody has tapped in yet.</p>"#.to_string()
    } else {
        let rows: String = attendees
            .iter()
            .map(|a| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&a.student_name),
                    stamp(&a.tapped_at),
                    escape(&a.method),
                    escape(&a.credential_type),
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Student</th><th>Tapped at</th><th>Method</th><th>Credential</th></tr>\n{rows}</table>"
        )
    };

    let content = format!(
        r#"<p><a href="/lecturer/{lecturer_id}">Back to dashboard</a></p>
<h1>{code} {name}</h1>
<p>{room} &middot; {day} {start} - {end} &middot; {lecturer}</p>
<p><a href="/lecturer/{lecturer_id}/report.csv?lecture_id={id}">Download CSV</a></p>
<h2>Attendees ({count})</h2>
{table}"#,
        lecturer_id = lecture.lecturer_id,
        id = lecture.id,
        code = escape(&lecture.module_code),
        name = escape(&lecture.module_name),
        room = escape(&lecture.room_name),
        day = lecture.start_time.format("%Y-%m-%d"),
        start = clock(&lecture.start_time),
        end = clock(&lecture.end_time),
        lecturer = escape(&lecture.lecturer_name),
        count = attendees.len(),
    );
    layout(&format!("{} report", lecture.module_code), &content)
}
