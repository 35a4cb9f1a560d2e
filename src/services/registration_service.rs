//! Registration service - Creates student records from submitted forms.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewStudent, Student, StudentForm};
use crate::errors::AppResult;
use crate::infra::StudentRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate a form and persist the student it describes
    async fn register(&self, form: StudentForm) -> AppResult<Student>;
}

/// Concrete implementation of RegistrationService
pub struct Registrar {
    students: Arc<dyn StudentRepository>,
}

impl Registrar {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, form: StudentForm) -> AppResult<Student> {
        let new_student = NewStudent::try_from(form)?;
        let student = self.students.create(new_student).await?;

        tracing::info!(
            student_id = %student.id,
            programme = %student.programme,
            "Student registered"
        );

        Ok(student)
    }
}
