//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_enrollment_number;
use serde_json::json;

/// Database row for the `students` table.
///
/// Kept separate from the domain entity so the persistence schema can evolve
/// without leaking into the domain layer.
#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    enrollment_number: String,
    first_name: String,
    last_name: String,
    email: String,
    birth_date: Option<NaiveDate>,
    active: bool,
    deactivation_reason: Option<String>,
    deactivated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(
            row.id,
            row.enrollment_number,
            row.first_name,
            row.last_name,
            row.email,
            row.birth_date,
            row.active,
            row.deactivation_reason,
            row.deactivated_at,
            row.created_at,
            row.updated_at,
        )
    }
}

const STUDENT_COLUMNS: &str = "id, enrollment_number, first_name, last_name, email, birth_date, \
     active, deactivation_reason, deactivated_at, created_at, updated_at";

/// PostgreSQL repository for student storage and retrieval.
///
/// Every mutating operation runs inside an explicit transaction; dropping
/// the transaction on an error path rolls back any partial write. `update`
/// and `deactivate` take a row-level lock before writing so read-then-write
/// cycles against the same student cannot interleave.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE active ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_enrollment_number(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE enrollment_number = $1"
        ))
        .bind(enrollment_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn lock_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let mut tx = self.pool.begin().await?;

        // Blocks behind any concurrent transaction holding the row lock;
        // the lock is released when this transaction completes.
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "INSERT INTO students (enrollment_number, first_name, last_name, email, birth_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&new_student.enrollment_number)
        .bind(&new_student.first_name)
        .bind(&new_student.last_name)
        .bind(&new_student.email)
        .bind(new_student.birth_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on_enrollment_number(&e) {
                AppError::conflict(
                    "Enrollment number already assigned",
                    json!({ "enrollment_number": new_student.enrollment_number.clone() }),
                )
            } else {
                e.into()
            }
        })?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "UPDATE students SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 email = COALESCE($4, email), \
                 birth_date = CASE WHEN $5 THEN $6 ELSE birth_date END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.email)
        .bind(patch.birth_date.is_some())
        .bind(patch.birth_date.flatten())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }

    async fn deactivate(&self, id: i64, reason: &str) -> Result<Option<Student>, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Ok(None);
        }

        // COALESCE keeps the first deactivation time on repeated calls.
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "UPDATE students SET \
                 active = FALSE, \
                 deactivation_reason = $2, \
                 deactivated_at = COALESCE(deactivated_at, NOW()), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(id)
        .bind(reason)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
