//! Tsundoku - a tracker for the books you want to read
//!
//! This library provides the core of a reading-list tracker: a durable
//! store for the tracked list and a search session against an external
//! bibliographic catalog for adding new entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TsundokuError {
    /// Store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A tracked entry on the reading list
///
/// This is the shape persisted in the durable slot as a JSON array
/// element: `{"id": number, "title": string, "authors": string,
/// "memo": string}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BookToRead {
    /// Unique within the store, assigned at creation, immutable afterwards
    pub id: u64,
    pub title: String,
    /// Free-form, possibly comma-joined author list; may be empty
    pub authors: String,
    /// User-editable note; may be empty
    pub memo: String,
}

/// A catalog search result, before it is adopted into the list
///
/// Ephemeral: lives only inside a search session's result set. Adoption
/// through [`store::Library::add`] strips the thumbnail and injects a
/// fresh id plus an empty memo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDescription {
    pub title: String,
    /// Comma-joined author list, empty when the catalog provides none
    pub authors: String,
    /// Cover-image URL, empty when unavailable
    pub thumbnail: String,
}

impl BookDescription {
    /// Create a new `BookDescription`
    #[must_use]
    pub const fn new(title: String, authors: String, thumbnail: String) -> Self {
        Self {
            title,
            authors,
            thumbnail,
        }
    }
}
