//! HTTP request handlers.

pub mod registration_handler;
pub mod student_handler;
pub mod upload_handler;

pub use registration_handler::registration_routes;
pub use student_handler::student_routes;
pub use upload_handler::upload_routes;
