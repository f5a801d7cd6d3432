//! Catalog lookup client
//!
//! The external bibliographic catalog sits behind the [`CatalogLookup`]
//! trait so the search session can be driven by a fake in tests. The
//! production implementation targets the Google Books volumes endpoint.
//!
//! Raw catalog items are translated into [`BookDescription`] values here;
//! nothing outside this module sees the wire shape.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::error::CatalogError;
use crate::BookDescription;

/// Default endpoint of the production catalog
pub const GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// An in-flight lookup that has not answered within this window counts
/// as failed.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Criteria for a single catalog lookup
///
/// Built by the search session from its current filters and result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeQuery {
    title: String,
    author: String,
    max_results: u32,
}

impl VolumeQuery {
    /// Create a new query; empty criteria are simply left out of the
    /// filter expression
    #[must_use]
    pub const fn new(title: String, author: String, max_results: u32) -> Self {
        Self {
            title,
            author,
            max_results,
        }
    }

    /// Build the `q` filter expression
    ///
    /// An `intitle:` clause and an `inauthor:` clause for the non-empty
    /// criteria, joined with `+`.
    #[must_use]
    pub fn filter_expression(&self) -> String {
        let mut clauses = Vec::new();
        if !self.title.is_empty() {
            clauses.push(format!("intitle:{}", self.title));
        }
        if !self.author.is_empty() {
            clauses.push(format!("inauthor:{}", self.author));
        }
        clauses.join("+")
    }

    /// Build the full request URL against the given endpoint
    #[must_use]
    pub fn request_url(&self, endpoint: &str) -> String {
        format!(
            "{endpoint}?q={}&maxResults={}",
            self.filter_expression(),
            self.max_results
        )
    }

    /// Result-count cap for this lookup
    #[must_use]
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }
}

/// External catalog lookup service
///
/// One call is one complete lookup: criteria in, mapped descriptions out.
#[async_trait]
pub trait CatalogLookup {
    /// Run a single lookup against the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the response body
    /// cannot be decoded.
    async fn search(&self, query: &VolumeQuery) -> Result<Vec<BookDescription>, CatalogError>;
}

/// Google Books volumes API client
pub struct GoogleBooksClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleBooksClient {
    /// Create a client against the production endpoint
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_endpoint(GOOGLE_BOOKS_ENDPOINT)
    }

    /// Create a client against a custom endpoint
    ///
    /// Used by the configuration override and by tests that point the
    /// client at a local server.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the HTTP client cannot be constructed.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CatalogLookup for GoogleBooksClient {
    async fn search(&self, query: &VolumeQuery) -> Result<Vec<BookDescription>, CatalogError> {
        let url = query.request_url(&self.endpoint);
        tracing::debug!(%url, "catalog lookup");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let volumes: VolumesResponse = serde_json::from_slice(&body)
            .map_err(|err| CatalogError::MalformedResponse(err.to_string()))?;

        Ok(map_volumes(volumes))
    }
}

// Wire types for the volumes response. Every field the catalog may omit
// is optional or defaulted so partial payloads degrade to skipped items
// instead of decode failures.

#[derive(Debug, Default, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<VolumeItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    #[serde(default)]
    title: String,
    authors: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    small_thumbnail: Option<String>,
}

/// Translate a decoded volumes response into the domain shape
///
/// Items without volume metadata are skipped. `authors` is the
/// comma-join of the catalog's author list, empty when absent;
/// `thumbnail` is the small-thumbnail URL, empty when absent.
fn map_volumes(response: VolumesResponse) -> Vec<BookDescription> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.volume_info)
        .map(|info| BookDescription {
            title: info.title,
            authors: info.authors.map(|a| a.join(", ")).unwrap_or_default(),
            thumbnail: info
                .image_links
                .and_then(|links| links.small_thumbnail)
                .unwrap_or_default(),
        })
        .collect()
}
