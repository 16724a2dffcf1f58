//! Server-rendered HTML pages.
//!
//! Pages are plain strings built around one shared [`layout`]. Every value that came
//! from the database goes through [`escape`].

pub mod home;
pub mod lecturer;
pub mod report;
pub mod student;

use chrono::NaiveDateTime;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn clock(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

pub(crate) fn stamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Wraps page content in the shared document shell.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Attendance</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem auto; max-width: 56rem; color: #222; }}
    table {{ border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }}
    th, td {{ border-bottom: 1px solid #ddd; padding: .4rem .6rem; text-align: left; }}
    .rate {{ font-size: 2rem; font-weight: bold; }}
    .empty {{ color: #777; }}
  </style>
</head>
<body>
<nav><a href="/">Switch user</a></nav>
{content}
</body>
</html>
"#,
        title = escape(title),
    )
}
