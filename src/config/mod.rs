//! Application configuration module
//!
//! Environment-driven settings plus the fixed admission and upload rules.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
