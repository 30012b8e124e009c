//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::StudentService;

/// Handler-visible application state.
///
/// Holds only `Arc`s, so cloning per request is cheap and the API layer
/// stays free of shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService>,
}

impl AppState {
    /// Creates application state from the wired service.
    pub fn new(student_service: Arc<StudentService>) -> Self {
        Self { student_service }
    }
}
