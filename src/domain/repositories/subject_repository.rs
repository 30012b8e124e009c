//! Repository trait for subject data access.

use crate::domain::entities::Subject;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the subjects a student is enrolled in.
///
/// Subjects are read-only here; enrollment management lives outside this
/// service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Lists the subjects associated with a student, ordered by code.
    ///
    /// Existence of the student is not checked here; callers verify it
    /// first to distinguish "no subjects" from "no such student".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_student(&self, student_id: i64) -> Result<Vec<Subject>, AppError>;
}
