//! Student entity representing a registered student record.

use chrono::{DateTime, NaiveDate, Utc};

/// A registered student.
///
/// Identified internally by `id` and externally by the unique, immutable
/// `enrollment_number`. Students are never hard-deleted: deactivation flips
/// `active` to `false` and records the reason.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: i64,
    pub enrollment_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub active: bool,
    pub deactivation_reason: Option<String>,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Creates a new Student instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
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
    ) -> Self {
        Self {
            id,
            enrollment_number,
            first_name,
            last_name,
            email,
            birth_date,
            active,
            deactivation_reason,
            deactivated_at,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the student has been deactivated.
    pub fn is_deactivated(&self) -> bool {
        !self.active
    }

    /// Full display name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for registering a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub enrollment_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

/// Partial update for an existing student.
///
/// `None` fields are left unchanged. The enrollment number is immutable and
/// deliberately absent.
///
/// `birth_date: Some(None)` clears the date; `Some(Some(d))` sets it.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student(active: bool) -> Student {
        let now = Utc::now();
        Student::new(
            1,
            "2024-001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.edu".to_string(),
            None,
            active,
            if active {
                None
            } else {
                Some("graduated".to_string())
            },
            if active { None } else { Some(now) },
            now,
            now,
        )
    }

    #[test]
    fn test_student_creation() {
        let student = sample_student(true);

        assert_eq!(student.id, 1);
        assert_eq!(student.enrollment_number, "2024-001");
        assert!(student.active);
        assert!(!student.is_deactivated());
        assert!(student.deactivation_reason.is_none());
        assert!(student.deactivated_at.is_none());
    }

    #[test]
    fn test_student_deactivated() {
        let student = sample_student(false);

        assert!(student.is_deactivated());
        assert_eq!(student.deactivation_reason.as_deref(), Some("graduated"));
        assert!(student.deactivated_at.is_some());
    }

    #[test]
    fn test_full_name() {
        let student = sample_student(true);
        assert_eq!(student.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_default_patch_changes_nothing() {
        let patch = StudentPatch::default();

        assert!(patch.first_name.is_none());
        assert!(patch.last_name.is_none());
        assert!(patch.email.is_none());
        assert!(patch.birth_date.is_none());
    }
}
