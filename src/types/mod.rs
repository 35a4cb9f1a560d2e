//! Shared types for list and write endpoints.

mod pagination;
mod response;

pub use pagination::{PageParams, Paginated};
pub use response::{Created, Success};
