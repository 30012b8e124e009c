//! Handler for the subjects-of-student endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::subject::SubjectResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the subjects a student is enrolled in.
///
/// # Endpoint
///
/// `GET /api/estudiantes/{id}/materias`
///
/// # Errors
///
/// Returns 404 Not Found if the student doesn't exist — a missing student
/// is distinguished from one with no enrollments, which yields `200 []`.
pub async fn student_subjects_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectResponse>>, AppError> {
    let subjects = state.student_service.subjects_of_student(id).await?;

    Ok(Json(subjects.into_iter().map(Into::into).collect()))
}
