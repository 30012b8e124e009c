//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Separate
//! structs carry write intents:
//!
//! - [`NewStudent`] - for registering new records
//! - [`StudentPatch`] - for partial updates
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod student;
pub mod subject;

pub use student::{NewStudent, Student, StudentPatch};
pub use subject::Subject;
