//! Testing utilities for tsundoku
//!
//! Helper types for writing tests: a temporary slot directory for library
//! round-trips and a scripted catalog backend for session tests.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::catalog::{CatalogError, CatalogLookup, VolumeQuery};
use crate::store::Library;
use crate::BookDescription;

/// Build a `BookDescription` with an empty thumbnail
#[must_use]
pub fn description(title: &str, authors: &str) -> BookDescription {
    BookDescription::new(title.to_string(), authors.to_string(), String::new())
}

/// Temporary directory holding a library's durable slot
///
/// The directory is removed when the wrapper goes out of scope. A library
/// must be dropped before the same slot is opened again; sled holds a
/// lock on the directory while open.
pub struct TestSlotDir {
    dir: TempDir,
}

impl TestSlotDir {
    /// Create a fresh slot directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary slot directory"),
        }
    }

    /// Open a library over this slot
    ///
    /// # Panics
    /// Panics if the library cannot be opened.
    #[must_use]
    pub fn open(&self) -> Library {
        Library::open(self.dir.path().join("books")).expect("Failed to open test library")
    }
}

impl Default for TestSlotDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Scripted catalog backend for session tests
///
/// Answers queued responses in order (defaulting to empty result sets
/// once the queue is drained) and records every query it receives.
/// Cloning shares the script and the recorded queries.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    inner: Arc<FakeCatalogInner>,
}

#[derive(Default)]
struct FakeCatalogInner {
    responses: Mutex<VecDeque<Result<Vec<BookDescription>, CatalogError>>>,
    queries: Mutex<Vec<VolumeQuery>>,
}

impl FakeCatalog {
    /// Queue a successful lookup answer
    pub fn push_results(&self, results: Vec<BookDescription>) {
        self.inner.responses.lock().unwrap().push_back(Ok(results));
    }

    /// Queue a failed lookup
    pub fn push_failure(&self) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Err(CatalogError::MalformedResponse(
                "scripted failure".to_string(),
            )));
    }

    /// The queries received so far, in order
    #[must_use]
    pub fn queries(&self) -> Vec<VolumeQuery> {
        self.inner.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogLookup for FakeCatalog {
    async fn search(&self, query: &VolumeQuery) -> Result<Vec<BookDescription>, CatalogError> {
        self.inner.queries.lock().unwrap().push(query.clone());
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_dir_opens_fresh_library() {
        let dir = TestSlotDir::new();
        let library = dir.open();

        assert_eq!(library.count(), 0);
    }

    #[tokio::test]
    async fn test_fake_catalog_answers_in_order_then_empty() {
        let catalog = FakeCatalog::default();
        catalog.push_results(vec![description("A", "")]);

        let query = VolumeQuery::new("a".to_string(), String::new(), 1);
        assert_eq!(catalog.search(&query).await.unwrap().len(), 1);
        assert!(catalog.search(&query).await.unwrap().is_empty());
        assert_eq!(catalog.queries().len(), 2);
    }
}
