//! Core error types shared across the crate.

pub mod error;

pub use error::{ErrorContext, GeneratorError, user_friendly_error};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeneratorError>;
