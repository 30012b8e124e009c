//! Subject entity for the courses a student is enrolled in.

/// A course subject.
///
/// Subjects are read-only from this service's perspective: they are related
/// to students through an enrollment table, and this API only lists them.
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub credits: i32,
}

impl Subject {
    /// Creates a new Subject instance.
    pub fn new(id: i64, code: String, name: String, credits: i32) -> Self {
        Self {
            id,
            code,
            name,
            credits,
        }
    }
}
