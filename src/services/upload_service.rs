//! Upload service - Attaches a BECE result document to a student.
//!
//! A student holds at most one document. The file is written first and the
//! record updated second; whenever the record update does not happen the
//! written file is removed again, so storage never keeps orphans.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{stored_filename, Student, UploadedDocument};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{DocumentStorage, StudentRepository};

const ALREADY_UPLOADED: &str = "A BECE result has already been uploaded for this student";

/// Upload service trait for dependency injection.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Fail fast before any body is read: the student must exist and
    /// must not have a document yet.
    async fn ensure_accepting(&self, student_id: Uuid) -> AppResult<Student>;

    /// Validate, store and attach a document; returns the updated student
    async fn upload(&self, student_id: Uuid, document: UploadedDocument) -> AppResult<Student>;
}

/// Concrete implementation of UploadService
pub struct DocumentUploader {
    students: Arc<dyn StudentRepository>,
    storage: Arc<dyn DocumentStorage>,
}

impl DocumentUploader {
    pub fn new(students: Arc<dyn StudentRepository>, storage: Arc<dyn DocumentStorage>) -> Self {
        Self { students, storage }
    }

    async fn discard(&self, filename: &str) {
        if let Err(e) = self.storage.remove(filename).await {
            tracing::warn!("Failed to remove unattached document {}: {}", filename, e);
        }
    }
}

#[async_trait]
impl UploadService for DocumentUploader {
    async fn ensure_accepting(&self, student_id: Uuid) -> AppResult<Student> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_not_found("Student")?;

        if student.has_document() {
            return Err(AppError::conflict(ALREADY_UPLOADED));
        }

        Ok(student)
    }

    async fn upload(&self, student_id: Uuid, document: UploadedDocument) -> AppResult<Student> {
        self.ensure_accepting(student_id).await?;
        let kind = document.validate()?;

        let filename = stored_filename(
            Utc::now(),
            student_id,
            document.original_name.as_deref(),
            kind,
        );
        self.storage
            .store(&filename, &document.bytes)
            .await
            .map_err(|e| match e {
                // Same name means a concurrent upload for this student got there first
                AppError::Storage(io) if io.kind() == std::io::ErrorKind::AlreadyExists => {
                    AppError::conflict(ALREADY_UPLOADED)
                }
                other => other,
            })?;

        match self.students.attach_document(student_id, &filename).await {
            Ok(Some(student)) => {
                tracing::info!(
                    student_id = %student_id,
                    filename = %filename,
                    size = document.bytes.len(),
                    "BECE result attached"
                );
                Ok(student)
            }
            // Lost a race with a concurrent upload
            Ok(None) => {
                self.discard(&filename).await;
                Err(AppError::conflict(ALREADY_UPLOADED))
            }
            Err(e) => {
                self.discard(&filename).await;
                Err(e)
            }
        }
    }
}
