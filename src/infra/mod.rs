//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and repositories
//! - Document storage on the local filesystem

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, Migrator};
pub use repositories::{StudentRepository, StudentStore};
pub use storage::{DocumentStorage, LocalDiskStorage};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockDocumentStorage;
