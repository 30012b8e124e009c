//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing student records.
///
/// Covers listings, lookups by id and enrollment number, a pessimistically
/// locked read, and the three transactional mutations (create, update,
/// deactivate).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Lists all students, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Lists students with `active = true`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active(&self) -> Result<Vec<Student>, AppError>;

    /// Finds a student by internal id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Student))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Finds a student by enrollment number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_enrollment_number(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>, AppError>;

    /// Reads a student row under an exclusive row-level lock.
    ///
    /// The implementation acquires the lock inside a transaction
    /// (`SELECT … FOR UPDATE`), blocking behind any concurrent holder, and
    /// releases it when that transaction completes. Concurrent callers for
    /// the same id serialize.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or lock failures.
    async fn lock_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Inserts a new student inside a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the enrollment number already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Applies a partial update inside a transaction.
    ///
    /// Only fields present in [`StudentPatch`] are modified; the target row
    /// is locked before writing. Returns `Ok(None)` if no student matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>, AppError>;

    /// Marks a student inactive inside a transaction, recording the reason.
    ///
    /// Idempotent on status: repeating the call keeps the student inactive,
    /// updates the stored reason, and preserves the first deactivation time.
    /// Returns `Ok(None)` if no student matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, id: i64, reason: &str) -> Result<Option<Student>, AppError>;

    /// Counts all student records. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
