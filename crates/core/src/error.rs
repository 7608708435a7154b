//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers re-prompt or ignore, they never
/// abort. IO and serialization failures live in the infrastructure crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A spice name was empty, whitespace-only, or had no letter to shelve by.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A value failed validation (e.g. malformed request input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested entry was not found.
    #[error("not found")]
    NotFound,

    /// An out-of-contract configuration value.
    ///
    /// Shelf counts are clamped rather than rejected, so this only surfaces
    /// from callers that opt into strict validation.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
