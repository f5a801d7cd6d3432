//! Catalog-specific error types
//!
//! This module defines error types for the external catalog lookup and
//! the search session built on top of it.
//!
//! # Error Types
//!
//! - **`EmptyCriteria`**: A search was triggered with no criteria at all;
//!   surfaced to the user, no lookup is performed
//! - **`HttpError`**: Transport-level failure talking to the catalog
//! - **`MalformedResponse`**: The catalog answered with a body that could
//!   not be decoded into the expected shape

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No search criteria were provided
    #[error("Enter a title or an author to search for")]
    EmptyCriteria,

    /// HTTP request to the catalog failed
    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The catalog response body could not be decoded
    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),
}
