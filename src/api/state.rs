//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, DocumentStorage};
use crate::services::{
    DirectoryService, RegistrationService, ServiceContainer, Services, UploadService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Student registration
    pub registration_service: Arc<dyn RegistrationService>,
    /// Listing and per-programme summary
    pub directory_service: Arc<dyn DirectoryService>,
    /// BECE result uploads
    pub upload_service: Arc<dyn UploadService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Uploaded document storage
    pub storage: Arc<dyn DocumentStorage>,
}

impl AppState {
    /// Create application state from a database and document storage,
    /// wiring every service through the ServiceContainer.
    pub fn from_config(database: Arc<Database>, storage: Arc<dyn DocumentStorage>) -> Self {
        let container = Services::from_connection(database.get_connection(), storage.clone());

        Self {
            registration_service: container.registration(),
            directory_service: container.directory(),
            upload_service: container.uploads(),
            database,
            storage,
        }
    }
}
