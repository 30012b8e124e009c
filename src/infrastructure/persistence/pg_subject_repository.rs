//! PostgreSQL implementation of the subject repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Subject;
use crate::domain::repositories::SubjectRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SubjectRow {
    id: i64,
    code: String,
    name: String,
    credits: i32,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Subject::new(row.id, row.code, row.name, row.credits)
    }
}

/// PostgreSQL repository for subject lookups.
pub struct PgSubjectRepository {
    pool: Arc<PgPool>,
}

impl PgSubjectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectRepository for PgSubjectRepository {
    async fn list_for_student(&self, student_id: i64) -> Result<Vec<Subject>, AppError> {
        let rows = sqlx::query_as::<_, SubjectRow>(
            "SELECT s.id, s.code, s.name, s.credits \
             FROM subjects s \
             JOIN student_subjects ss ON ss.subject_id = s.id \
             WHERE ss.student_id = $1 \
             ORDER BY s.code",
        )
        .bind(student_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
