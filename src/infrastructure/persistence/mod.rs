//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Mutations run inside explicit transactions; row-level locks back the
//! locked-read operation.
//!
//! # Repositories
//!
//! - [`PgStudentRepository`] - student storage and retrieval
//! - [`PgSubjectRepository`] - subject lookups

pub mod pg_student_repository;
pub mod pg_subject_repository;

pub use pg_student_repository::PgStudentRepository;
pub use pg_subject_repository::PgSubjectRepository;
