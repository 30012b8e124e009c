//! Handlers for student endpoints (listings, lookups, create, update, deactivate).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::student::{
    CreateStudentRequest, DeactivateStudentRequest, StudentRecordResponse, StudentResponse,
    UpdateStudentRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered student.
///
/// # Endpoint
///
/// `GET /api/estudiantes`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Lists students whose status is active.
///
/// Deactivated students disappear from this listing on the next call.
///
/// # Endpoint
///
/// `GET /api/estudiantes/activos`
pub async fn list_active_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.list_active_students().await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Looks up a student by enrollment number.
///
/// # Endpoint
///
/// `GET /api/estudiantes/inscripcion/{numeroInscripcion}`
///
/// # Errors
///
/// Returns 404 Not Found if no student carries the number.
pub async fn student_by_enrollment_handler(
    Path(enrollment_number): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state
        .student_service
        .get_student_by_enrollment_number(&enrollment_number)
        .await?;

    Ok(Json(student.into()))
}

/// Reads a student under an exclusive row lock.
///
/// Returns the full record rather than the boundary projection. Concurrent
/// callers for the same id serialize behind the row lock, which is released
/// when the backing transaction completes.
///
/// # Endpoint
///
/// `GET /api/estudiantes/{id}/lock`
///
/// # Errors
///
/// Returns 404 Not Found if the student doesn't exist.
pub async fn student_with_lock_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentRecordResponse>, AppError> {
    let student = state.student_service.get_student_with_lock(id).await?;

    Ok(Json(student.into()))
}

/// Registers a new student.
///
/// # Endpoint
///
/// `POST /api/estudiantes`
///
/// # Request Body
///
/// ```json
/// {
///   "enrollment_number": "2024-001",
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "email": "ada@example.edu",
///   "birth_date": "2001-05-20"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, listing every violated
/// field; nothing is persisted in that case.
/// Returns 409 Conflict if the enrollment number is already assigned.
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    payload.validate()?;

    let student = state.student_service.create_student(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Partially updates a student.
///
/// # Endpoint
///
/// `PUT /api/estudiantes/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; the
/// enrollment number is immutable and not accepted here.
///
/// ```json
/// {
///   "first_name": "Grace",
///   "email": "grace@example.edu",
///   "birth_date": null   // null clears the stored date
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the student doesn't exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    payload.validate()?;

    let student = state
        .student_service
        .update_student(id, payload.into())
        .await?;

    Ok(Json(student.into()))
}

/// Deactivates a student, recording the reason.
///
/// # Endpoint
///
/// `PUT /api/estudiantes/{id}/baja`
///
/// # Behavior
///
/// - The record is **not** removed; `active` flips to `false` and the
///   reason is stored.
/// - The student no longer appears in `GET /api/estudiantes/activos`.
/// - Repeating the call succeeds: the student stays inactive, the reason
///   is updated, and the original deactivation time is preserved.
///
/// # Errors
///
/// Returns 404 Not Found if the student doesn't exist.
/// Returns 400 Bad Request if the reason is missing or malformed.
pub async fn deactivate_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<DeactivateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    payload.validate()?;

    let student = state
        .student_service
        .deactivate_student(id, &payload.reason)
        .await?;

    Ok(Json(student.into()))
}
