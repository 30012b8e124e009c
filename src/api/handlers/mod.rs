//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod students;
pub mod subjects;

pub use health::health_handler;
pub use students::{
    create_student_handler, deactivate_student_handler, list_active_students_handler,
    list_students_handler, student_by_enrollment_handler, student_with_lock_handler,
    update_student_handler,
};
pub use subjects::student_subjects_handler;
