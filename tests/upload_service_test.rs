//! Upload service tests with real storage: SQLite in memory plus a temp directory.

mod common;

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use uuid::Uuid;

use admissions_api::config::MAX_UPLOAD_SIZE_BYTES;
use admissions_api::domain::{Programme, Student, UploadedDocument};
use admissions_api::errors::AppError;
use admissions_api::infra::{LocalDiskStorage, StudentRepository, StudentStore};
use admissions_api::services::{DocumentUploader, UploadService};

use common::{new_student, test_database};

struct Fixture {
    uploads: TempDir,
    students: Arc<StudentStore>,
    service: DocumentUploader,
}

impl Fixture {
    async fn new() -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let db = test_database().await;
        let students = Arc::new(StudentStore::new(db.get_connection()));
        let storage = Arc::new(LocalDiskStorage::new(uploads.path()).await.unwrap());
        let service = DocumentUploader::new(students.clone(), storage);

        Self {
            uploads,
            students,
            service,
        }
    }

    async fn student(&self) -> Student {
        self.students
            .create(new_student("Kwame", "Mensah", Programme::Science, 2024))
            .await
            .unwrap()
    }

    fn stored_files(&self) -> Vec<String> {
        list_files(self.uploads.path())
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn document(content_type: &str, name: &str, size: usize) -> UploadedDocument {
    UploadedDocument {
        original_name: Some(name.to_string()),
        content_type: Some(content_type.to_string()),
        bytes: vec![7u8; size],
    }
}

#[tokio::test]
async fn test_upload_records_stored_filename() {
    let fixture = Fixture::new().await;
    let student = fixture.student().await;

    let updated = fixture
        .service
        .upload(student.id, document("application/pdf", "Result.PDF", 2048))
        .await
        .unwrap();

    let filename = updated.bece_result_file.clone().unwrap();
    assert!(filename.ends_with(&format!("-{}.pdf", student.id)), "{}", filename);
    assert_eq!(fixture.stored_files(), vec![filename.clone()]);

    let bytes = std::fs::read(fixture.uploads.path().join(&filename)).unwrap();
    assert_eq!(bytes.len(), 2048);

    let reloaded = fixture.students.find_by_id(student.id).await.unwrap().unwrap();
    assert_eq!(reloaded.bece_result_file, Some(filename));
}

#[tokio::test]
async fn test_accepts_every_allowed_type() {
    let fixture = Fixture::new().await;

    for (content_type, name) in [
        ("application/pdf", "slip.pdf"),
        ("image/png", "slip.png"),
        ("image/jpeg", "slip.jpeg"),
    ] {
        let student = fixture.student().await;
        let result = fixture
            .service
            .upload(student.id, document(content_type, name, 100))
            .await;
        assert!(result.is_ok(), "{} rejected", content_type);
    }

    assert_eq!(fixture.stored_files().len(), 3);
}

#[tokio::test]
async fn test_unknown_student_leaves_no_file() {
    let fixture = Fixture::new().await;

    let result = fixture
        .service
        .upload(Uuid::new_v4(), document("application/pdf", "slip.pdf", 100))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(fixture.stored_files().is_empty());
}

#[tokio::test]
async fn test_oversized_file_is_rejected_without_mutation() {
    let fixture = Fixture::new().await;
    let student = fixture.student().await;

    let result = fixture
        .service
        .upload(student.id, document("application/pdf", "big.pdf", 4 * 1024 * 1024))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FileTooLarge { limit }) if limit == MAX_UPLOAD_SIZE_BYTES
    ));
    assert!(fixture.stored_files().is_empty());
    let reloaded = fixture.students.find_by_id(student.id).await.unwrap().unwrap();
    assert!(reloaded.bece_result_file.is_none());
}

#[tokio::test]
async fn test_disallowed_type_is_rejected() {
    let fixture = Fixture::new().await;
    let student = fixture.student().await;

    let result = fixture
        .service
        .upload(student.id, document("application/zip", "slip.zip", 100))
        .await;

    assert!(matches!(result, Err(AppError::InvalidFileType(_))));
    assert!(fixture.stored_files().is_empty());
}

#[tokio::test]
async fn test_second_upload_keeps_first_document() {
    let fixture = Fixture::new().await;
    let student = fixture.student().await;

    let first = fixture
        .service
        .upload(student.id, document("image/png", "first.png", 100))
        .await
        .unwrap();

    let second = fixture
        .service
        .upload(student.id, document("application/pdf", "second.pdf", 100))
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(fixture.stored_files(), vec![first.bece_result_file.unwrap()]);
}

#[tokio::test]
async fn test_concurrent_uploads_produce_one_document() {
    let fixture = Fixture::new().await;
    let student = fixture.student().await;

    let (a, b) = tokio::join!(
        fixture
            .service
            .upload(student.id, document("application/pdf", "a.pdf", 100)),
        fixture
            .service
            .upload(student.id, document("image/png", "b.png", 100)),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    assert!(matches!(a, Ok(_) | Err(AppError::Conflict(_))));
    assert!(matches!(b, Ok(_) | Err(AppError::Conflict(_))));
    assert_eq!(fixture.stored_files().len(), 1);
}
