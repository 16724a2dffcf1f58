pub mod attendance;
pub mod enrollment;
pub mod lecture;
pub mod lecturer;
pub mod room;
pub mod student;

pub use attendance::Entity as Attendance;
pub use enrollment::Entity as Enrollment;
pub use lecture::Entity as Lecture;
pub use lecturer::Entity as Lecturer;
pub use room::Entity as Room;
pub use student::Entity as Student;
