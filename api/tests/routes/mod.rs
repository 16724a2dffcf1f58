mod attendance_test;
mod health_test;
mod lecturer_test;
mod tap_test;
