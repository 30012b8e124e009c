#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use student_service::application::services::StudentService;
use student_service::domain::entities::{NewStudent, Student, StudentPatch, Subject};
use student_service::domain::repositories::{StudentRepository, SubjectRepository};
use student_service::error::AppError;
use student_service::state::AppState;

/// In-memory student repository backing the handler suites.
///
/// Mirrors the PostgreSQL repository's observable contract (conflict on
/// duplicate enrollment numbers, `None` for missing ids, idempotent
/// deactivation preserving the first deactivation time) without a database.
pub struct InMemoryStudentRepository {
    students: Mutex<Vec<Student>>,
    next_id: AtomicI64,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a student directly, bypassing the service layer.
    pub fn seed(&self, enrollment_number: &str, first_name: &str, active: bool) -> Student {
        let mut students = self.students.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let student = Student::new(
            id,
            enrollment_number.to_string(),
            first_name.to_string(),
            "Tester".to_string(),
            format!("{}@example.edu", first_name.to_lowercase()),
            None,
            active,
            if active {
                None
            } else {
                Some("seeded inactive".to_string())
            },
            if active { None } else { Some(now) },
            now,
            now,
        );
        students.push(student.clone());
        student
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let mut students = self.students.lock().unwrap().clone();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    async fn list_active(&self) -> Result<Vec<Student>, AppError> {
        let mut students: Vec<Student> = self
            .students
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.active)
            .cloned()
            .collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_enrollment_number(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>, AppError> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.enrollment_number == enrollment_number)
            .cloned())
    }

    async fn lock_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        self.find_by_id(id).await
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let mut students = self.students.lock().unwrap();

        if students
            .iter()
            .any(|s| s.enrollment_number == new_student.enrollment_number)
        {
            return Err(AppError::conflict(
                "Enrollment number already assigned",
                json!({ "enrollment_number": new_student.enrollment_number }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let student = Student::new(
            id,
            new_student.enrollment_number,
            new_student.first_name,
            new_student.last_name,
            new_student.email,
            new_student.birth_date,
            true,
            None,
            None,
            now,
            now,
        );
        students.push(student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>, AppError> {
        let mut students = self.students.lock().unwrap();

        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        if let Some(first_name) = patch.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            student.last_name = last_name;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        if let Some(birth_date) = patch.birth_date {
            student.birth_date = birth_date;
        }
        student.updated_at = Utc::now();

        Ok(Some(student.clone()))
    }

    async fn deactivate(&self, id: i64, reason: &str) -> Result<Option<Student>, AppError> {
        let mut students = self.students.lock().unwrap();

        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        student.active = false;
        student.deactivation_reason = Some(reason.to_string());
        // First deactivation time wins, matching the SQL COALESCE.
        student.deactivated_at = student.deactivated_at.or_else(|| Some(Utc::now()));
        student.updated_at = Utc::now();

        Ok(Some(student.clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.students.lock().unwrap().len() as i64)
    }
}

/// In-memory subject repository with a seeding helper.
pub struct InMemorySubjectRepository {
    by_student: Mutex<HashMap<i64, Vec<Subject>>>,
}

impl InMemorySubjectRepository {
    pub fn new() -> Self {
        Self {
            by_student: Mutex::new(HashMap::new()),
        }
    }

    pub fn enroll(&self, student_id: i64, subject: Subject) {
        self.by_student
            .lock()
            .unwrap()
            .entry(student_id)
            .or_default()
            .push(subject);
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn list_for_student(&self, student_id: i64) -> Result<Vec<Subject>, AppError> {
        let mut subjects = self
            .by_student
            .lock()
            .unwrap()
            .get(&student_id)
            .cloned()
            .unwrap_or_default();
        subjects.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(subjects)
    }
}

/// Student repository whose every operation fails, for degraded-health tests.
pub struct FailingStudentRepository;

impl FailingStudentRepository {
    fn error() -> AppError {
        AppError::internal("Database error", json!({}))
    }
}

#[async_trait]
impl StudentRepository for FailingStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        Err(Self::error())
    }

    async fn list_active(&self) -> Result<Vec<Student>, AppError> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Student>, AppError> {
        Err(Self::error())
    }

    async fn find_by_enrollment_number(
        &self,
        _enrollment_number: &str,
    ) -> Result<Option<Student>, AppError> {
        Err(Self::error())
    }

    async fn lock_by_id(&self, _id: i64) -> Result<Option<Student>, AppError> {
        Err(Self::error())
    }

    async fn create(&self, _new_student: NewStudent) -> Result<Student, AppError> {
        Err(Self::error())
    }

    async fn update(&self, _id: i64, _patch: StudentPatch) -> Result<Option<Student>, AppError> {
        Err(Self::error())
    }

    async fn deactivate(&self, _id: i64, _reason: &str) -> Result<Option<Student>, AppError> {
        Err(Self::error())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(Self::error())
    }
}

/// Builds application state over in-memory repositories.
///
/// Returns the repository handles alongside the state so tests can seed
/// data directly.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryStudentRepository>,
    Arc<InMemorySubjectRepository>,
) {
    let students = Arc::new(InMemoryStudentRepository::new());
    let subjects = Arc::new(InMemorySubjectRepository::new());

    let service = Arc::new(StudentService::new(students.clone(), subjects.clone()));

    (AppState::new(service), students, subjects)
}

/// Builds application state over a repository that fails every call.
pub fn create_failing_state() -> AppState {
    let service = Arc::new(StudentService::new(
        Arc::new(FailingStudentRepository),
        Arc::new(InMemorySubjectRepository::new()),
    ));

    AppState::new(service)
}
