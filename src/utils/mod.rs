//! Utility functions and helpers.

pub mod form;
