//! Store-specific error types
//!
//! This module defines all error types that can occur while loading or
//! committing the reading list. Errors are categorized by failure source
//! and include context for debugging.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`JsonError`**: Failures when (de)serializing the list payload
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a JSON encoding or decoding error
    #[error("Error while encoding or decoding the reading list: {0}")]
    JsonError(#[from] serde_json::Error),
}
