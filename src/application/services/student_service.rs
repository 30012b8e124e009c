//! Student record management service.

use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentPatch, Subject};
use crate::domain::repositories::{StudentRepository, SubjectRepository};
use crate::error::AppError;
use serde_json::json;

/// Service exposing the student operations consumed by the HTTP layer.
///
/// Orchestrates repository calls and maps missing records to typed errors.
/// All persistence rules (transactions, row locks, unique constraints) live
/// behind the repository traits.
pub struct StudentService {
    students: Arc<dyn StudentRepository>,
    subjects: Arc<dyn SubjectRepository>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(students: Arc<dyn StudentRepository>, subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { students, subjects }
    }

    /// Lists every registered student, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.students.list().await
    }

    /// Lists students whose status is active, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_active_students(&self) -> Result<Vec<Student>, AppError> {
        self.students.list_active().await
    }

    /// Retrieves a student by enrollment number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no student carries the number.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student_by_enrollment_number(
        &self,
        enrollment_number: &str,
    ) -> Result<Student, AppError> {
        self.students
            .find_by_enrollment_number(enrollment_number)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Student not found",
                    json!({ "enrollment_number": enrollment_number }),
                )
            })
    }

    /// Lists the subjects a student is enrolled in.
    ///
    /// The student's existence is checked first so a missing student yields
    /// a not-found error rather than an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn subjects_of_student(&self, student_id: i64) -> Result<Vec<Subject>, AppError> {
        self.students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": student_id })))?;

        self.subjects.list_for_student(student_id).await
    }

    /// Retrieves a student by id under an exclusive row lock.
    ///
    /// Callers racing on the same id serialize behind the lock; see
    /// [`StudentRepository::lock_by_id`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors or lock failures.
    pub async fn get_student_with_lock(&self, student_id: i64) -> Result<Student, AppError> {
        self.students
            .lock_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": student_id })))
    }

    /// Registers a new student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the enrollment number is already
    /// assigned. Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        if self
            .students
            .find_by_enrollment_number(&new_student.enrollment_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Enrollment number already assigned",
                json!({ "enrollment_number": new_student.enrollment_number }),
            ));
        }

        self.students.create(new_student).await
    }

    /// Applies a partial update to an existing student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_student(
        &self,
        student_id: i64,
        patch: StudentPatch,
    ) -> Result<Student, AppError> {
        self.students
            .update(student_id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": student_id })))
    }

    /// Marks a student inactive, recording the deactivation reason.
    ///
    /// Idempotent on status: deactivating an already-inactive student
    /// succeeds and leaves the student inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn deactivate_student(
        &self,
        student_id: i64,
        reason: &str,
    ) -> Result<Student, AppError> {
        self.students
            .deactivate(student_id, reason)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": student_id })))
    }

    /// Counts registered students. Used by the health check as a cheap
    /// connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_students(&self) -> Result<i64, AppError> {
        self.students.count().await
    }
}
