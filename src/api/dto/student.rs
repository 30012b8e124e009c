//! DTOs for student endpoints.

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for enrollment number validation.
///
/// Enrollment numbers are year-prefixed, e.g. `2024-001`.
static ENROLLMENT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{3,6}$").unwrap());

/// Request body for `POST /api/estudiantes`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    /// Unique enrollment number, immutable once assigned.
    #[validate(regex(
        path = "*ENROLLMENT_NUMBER_REGEX",
        message = "Invalid enrollment number format"
    ))]
    pub enrollment_number: String,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub birth_date: Option<NaiveDate>,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        NewStudent {
            enrollment_number: req.enrollment_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            birth_date: req.birth_date,
        }
    }
}

/// Request body for `PUT /api/estudiantes/{id}`.
///
/// All fields are optional — only provided fields are changed. The
/// enrollment number is immutable and cannot appear here.
///
/// # `birth_date` semantics
///
/// - **Absent** (`birth_date` not in JSON) → leave existing value unchanged
/// - **`null`** → clear the stored date
/// - **Date** → set new value
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Birth date. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub birth_date: Option<Option<NaiveDate>>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        StudentPatch {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            birth_date: req.birth_date,
        }
    }
}

/// Request body for `PUT /api/estudiantes/{id}/baja`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeactivateStudentRequest {
    /// Why the student is being deactivated. Required.
    #[validate(length(min = 3, max = 500, message = "Reason must be 3-500 characters"))]
    pub reason: String,
}

/// Boundary projection of a student returned by the DTO endpoints.
///
/// Audit timestamps are internal and deliberately omitted; the lock
/// endpoint returns [`StudentRecordResponse`] instead.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub enrollment_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub active: bool,
    pub deactivation_reason: Option<String>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            enrollment_number: student.enrollment_number,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            birth_date: student.birth_date,
            active: student.active,
            deactivation_reason: student.deactivation_reason,
        }
    }
}

/// Full student record returned by `GET /api/estudiantes/{id}/lock`.
#[derive(Debug, Serialize)]
pub struct StudentRecordResponse {
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

impl From<Student> for StudentRecordResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            enrollment_number: student.enrollment_number,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            birth_date: student.birth_date,
            active: student.active,
            deactivation_reason: student.deactivation_reason,
            deactivated_at: student.deactivated_at,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}
