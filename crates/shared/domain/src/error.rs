//! Domain-level errors.
//!
//! These errors represent business rule violations. They are independent of
//! infrastructure concerns (HTTP, storage).

use thiserror::Error;

use crate::constants::INVALID_DECK_CODE_MESSAGE;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The deck code is not valid base64, or does not decode to UTF-8 text.
    /// Callers are not told which of the two steps failed.
    #[error("{}", INVALID_DECK_CODE_MESSAGE)]
    InvalidDeckCode,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
