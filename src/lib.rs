//! Student Admissions API
//!
//! Registers senior high school applicants, accepts a single BECE result
//! document per student, and serves a filtered, paginated student directory
//! with per-programme counts.
//!
//! Layering, outermost first: `cli` parses arguments and `commands` runs
//! them; `api` maps HTTP onto `services`; services apply `domain` rules and
//! reach the database and upload directory through traits in `infra`.
//! `config`, `types`, `utils` and `errors` are shared by every layer.
//!
//! ```bash
//! admissions-api migrate up
//! admissions-api serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Programme, Student};
pub use errors::{AppError, AppResult};
