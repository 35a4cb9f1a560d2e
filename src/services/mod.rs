//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod directory_service;
mod registration_service;
mod upload_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use directory_service::{DirectoryService, StudentDirectory};
pub use registration_service::{Registrar, RegistrationService};
pub use upload_service::{DocumentUploader, UploadService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
