/// Attended distinct lectures as a rounded percentage of enrolled sessions.
///
/// Zero when the student has no enrollments.
pub fn attendance_rate(attended: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((attended as f64 / total as f64) * 100.0).round() as u64
}
