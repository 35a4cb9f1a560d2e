//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: the Student entity, the Programme value object, registration
//! rules, directory query parsing, summary counts and document rules.

pub mod document;
pub mod programme;
pub mod query;
pub mod student;
pub mod summary;

pub use document::{stored_filename, DocumentKind, UploadedDocument};
pub use programme::Programme;
pub use query::{RawStudentQuery, SortField, SortOrder, StudentFilter, StudentQuery};
pub use student::{NewStudent, Student, StudentForm};
pub(crate) use student::validation_message;
pub use summary::ProgrammeSummary;
