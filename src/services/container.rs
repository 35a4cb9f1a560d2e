//! Service Container - Centralized service access.
//!
//! Depends on service traits, not implementations, so handlers and tests
//! can swap any service independently.

use std::sync::Arc;

use super::{DirectoryService, RegistrationService, UploadService};
use crate::infra::{DocumentStorage, StudentStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get registration service
    fn registration(&self) -> Arc<dyn RegistrationService>;

    /// Get directory (listing and summary) service
    fn directory(&self) -> Arc<dyn DirectoryService>;

    /// Get document upload service
    fn uploads(&self) -> Arc<dyn UploadService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    registration_service: Arc<dyn RegistrationService>,
    directory_service: Arc<dyn DirectoryService>,
    upload_service: Arc<dyn UploadService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        directory_service: Arc<dyn DirectoryService>,
        upload_service: Arc<dyn UploadService>,
    ) -> Self {
        Self {
            registration_service,
            directory_service,
            upload_service,
        }
    }

    /// Create service container from a database connection and document storage
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        storage: Arc<dyn DocumentStorage>,
    ) -> Self {
        use super::{DocumentUploader, Registrar, StudentDirectory};

        let students = Arc::new(StudentStore::new(db));

        Self {
            registration_service: Arc::new(Registrar::new(students.clone())),
            directory_service: Arc::new(StudentDirectory::new(students.clone())),
            upload_service: Arc::new(DocumentUploader::new(students, storage)),
        }
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    fn directory(&self) -> Arc<dyn DirectoryService> {
        self.directory_service.clone()
    }

    fn uploads(&self) -> Arc<dyn UploadService> {
        self.upload_service.clone()
    }
}
