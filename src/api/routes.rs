//! API route configuration.

use crate::api::handlers::{
    create_student_handler, deactivate_student_handler, list_active_students_handler,
    list_students_handler, student_by_enrollment_handler, student_subjects_handler,
    student_with_lock_handler, update_student_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Route table for the student resource, nested under `/api/estudiantes`.
///
/// # Endpoints
///
/// - `GET  /`                                 - List all students
/// - `GET  /activos`                          - List active students
/// - `GET  /inscripcion/{numeroInscripcion}`  - Look up by enrollment number
/// - `GET  /{id}/materias`                    - Subjects of a student
/// - `GET  /{id}/lock`                        - Locked read of a student record
/// - `POST /`                                 - Register a student
/// - `PUT  /{id}`                             - Partially update a student
/// - `PUT  /{id}/baja`                        - Deactivate a student
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_students_handler).post(create_student_handler),
        )
        .route("/activos", get(list_active_students_handler))
        .route(
            "/inscripcion/{numero_inscripcion}",
            get(student_by_enrollment_handler),
        )
        .route("/{id}", put(update_student_handler))
        .route("/{id}/materias", get(student_subjects_handler))
        .route("/{id}/lock", get(student_with_lock_handler))
        .route("/{id}/baja", put(deactivate_student_handler))
}
