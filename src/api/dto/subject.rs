//! DTOs for subject endpoints.

use crate::domain::entities::Subject;
use serde::Serialize;

/// JSON representation of a subject a student is enrolled in.
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub credits: i32,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            code: subject.code,
            name: subject.name,
            credits: subject.credits,
        }
    }
}
