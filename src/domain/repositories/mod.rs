//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`StudentRepository`] - student record CRUD and locked reads
//! - [`SubjectRepository`] - read-only subject lookups

pub mod student_repository;
pub mod subject_repository;

pub use student_repository::StudentRepository;
pub use subject_repository::SubjectRepository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
#[cfg(test)]
pub use subject_repository::MockSubjectRepository;
