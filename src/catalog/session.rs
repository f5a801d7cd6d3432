//! Catalog search session
//!
//! Manages one search-query lifecycle against the catalog without letting
//! overlapping queries corrupt the displayed results. The session is a
//! set of explicit transitions - [`start_lookup`](SearchSession::start_lookup)
//! claims the single in-flight lookup and produces the query,
//! [`finish_lookup`](SearchSession::finish_lookup) applies its outcome -
//! with [`trigger_search`](SearchSession::trigger_search) as the async
//! driver wiring the two around the client call.

use super::client::{CatalogLookup, VolumeQuery};
use super::error::CatalogError;
use crate::BookDescription;

/// What a call to [`SearchSession::trigger_search`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The lookup completed and the result set was replaced
    Completed,
    /// The lookup failed; the previous result set was kept
    Failed,
    /// A lookup was already in flight; this request was ignored
    InFlight,
}

/// Transient per-query state manager for catalog lookups
///
/// Owns the pending filters, the current result set and the in-flight
/// flag. At most one lookup runs at a time; a trigger while one is in
/// flight is ignored rather than queued or cancelling the prior one.
pub struct SearchSession<C: CatalogLookup> {
    client: C,
    max_results: u32,
    title_filter: String,
    author_filter: String,
    results: Vec<BookDescription>,
    in_flight: bool,
}

impl<C: CatalogLookup> SearchSession<C> {
    /// Create a session over the given client and result-count cap
    #[must_use]
    pub const fn new(client: C, max_results: u32) -> Self {
        Self {
            client,
            max_results,
            title_filter: String::new(),
            author_filter: String::new(),
            results: Vec::new(),
            in_flight: false,
        }
    }

    /// Update the pending title criterion
    ///
    /// Takes effect on the next triggered search; does not itself trigger
    /// a lookup.
    pub fn set_title_filter(&mut self, text: impl Into<String>) {
        self.title_filter = text.into();
    }

    /// Update the pending author criterion
    pub fn set_author_filter(&mut self, text: impl Into<String>) {
        self.author_filter = text.into();
    }

    /// The current result set, replaced wholesale by each completed lookup
    #[must_use]
    pub fn results(&self) -> &[BookDescription] {
        &self.results
    }

    /// Whether a lookup is currently in flight
    #[must_use]
    pub const fn search_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate the filters and claim the in-flight lookup
    ///
    /// # Returns
    /// * `Ok(Some(query))` - the lookup slot was claimed; run the query
    ///   and apply its outcome via [`finish_lookup`](Self::finish_lookup)
    /// * `Ok(None)` - a lookup is already in flight; the request is
    ///   ignored, not queued
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCriteria`] when both filters are
    /// empty; no lookup is performed and no state changes.
    pub fn start_lookup(&mut self) -> Result<Option<VolumeQuery>, CatalogError> {
        if self.title_filter.is_empty() && self.author_filter.is_empty() {
            return Err(CatalogError::EmptyCriteria);
        }

        if self.in_flight {
            return Ok(None);
        }

        self.in_flight = true;
        Ok(Some(VolumeQuery::new(
            self.title_filter.clone(),
            self.author_filter.clone(),
            self.max_results,
        )))
    }

    /// Apply the outcome of the in-flight lookup
    ///
    /// On success the result set is replaced wholesale; stale results are
    /// fully discarded, never merged. On failure the previous result set
    /// is kept and the failure is logged. Either way the in-flight flag
    /// is cleared.
    pub fn finish_lookup(&mut self, outcome: Result<Vec<BookDescription>, CatalogError>) {
        self.in_flight = false;

        match outcome {
            Ok(results) => {
                tracing::debug!(count = results.len(), "catalog lookup completed");
                self.results = results;
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog lookup failed; keeping previous results");
            }
        }
    }

    /// Run one lookup from the current filters
    ///
    /// Orchestrates [`start_lookup`](Self::start_lookup), the client call
    /// and [`finish_lookup`](Self::finish_lookup). Lookup failures do not
    /// propagate: they are logged, the previous result set is kept, and
    /// the outcome reports [`SearchOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCriteria`] when both filters are
    /// empty. No other error escapes this method.
    pub async fn trigger_search(&mut self) -> Result<SearchOutcome, CatalogError> {
        let Some(query) = self.start_lookup()? else {
            return Ok(SearchOutcome::InFlight);
        };

        let outcome = self.client.search(&query).await;
        let failed = outcome.is_err();
        self.finish_lookup(outcome);

        Ok(if failed {
            SearchOutcome::Failed
        } else {
            SearchOutcome::Completed
        })
    }

    /// The result the user picked, by position in the displayed list
    ///
    /// Hands the chosen description to the caller for adoption into the
    /// library; the result set itself is not mutated.
    #[must_use]
    pub fn select_result(&self, index: usize) -> Option<&BookDescription> {
        self.results.get(index)
    }

    /// Clear filters and results for a fresh query
    ///
    /// An in-flight lookup is unaffected; its outcome will still be
    /// applied by [`finish_lookup`](Self::finish_lookup).
    pub fn reset(&mut self) {
        self.title_filter.clear();
        self.author_filter.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCatalog, description};

    fn session(catalog: &FakeCatalog) -> SearchSession<FakeCatalog> {
        SearchSession::new(catalog.clone(), 20)
    }

    #[tokio::test]
    async fn test_empty_criteria_is_rejected_without_lookup() {
        let catalog = FakeCatalog::default();
        let mut session = session(&catalog);

        let err = session.trigger_search().await.unwrap_err();

        assert!(matches!(err, CatalogError::EmptyCriteria));
        assert!(session.results().is_empty());
        assert!(!session.search_in_flight());
        assert_eq!(catalog.queries().len(), 0);
    }

    #[tokio::test]
    async fn test_completed_lookup_replaces_results_wholesale() {
        let catalog = FakeCatalog::default();
        catalog.push_results(vec![description("Old A", ""), description("Old B", "")]);
        catalog.push_results(vec![description("New", "")]);

        let mut session = session(&catalog);
        session.set_title_filter("old");
        assert_eq!(
            session.trigger_search().await.unwrap(),
            SearchOutcome::Completed
        );
        assert_eq!(session.results().len(), 2);

        session.set_title_filter("new");
        assert_eq!(
            session.trigger_search().await.unwrap(),
            SearchOutcome::Completed
        );

        // Never merged: the stale results are gone.
        assert_eq!(session.results(), &[description("New", "")]);
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_previous_results() {
        let catalog = FakeCatalog::default();
        catalog.push_results(vec![description("Kept", "")]);
        catalog.push_failure();

        let mut session = session(&catalog);
        session.set_title_filter("anything");
        session.trigger_search().await.unwrap();

        assert_eq!(
            session.trigger_search().await.unwrap(),
            SearchOutcome::Failed
        );
        assert_eq!(session.results(), &[description("Kept", "")]);
        assert!(!session.search_in_flight());
    }

    #[tokio::test]
    async fn test_first_lookup_failure_leaves_results_empty() {
        let catalog = FakeCatalog::default();
        catalog.push_failure();

        let mut session = session(&catalog);
        session.set_author_filter("anyone");

        assert_eq!(
            session.trigger_search().await.unwrap(),
            SearchOutcome::Failed
        );
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_trigger_while_in_flight_is_ignored() {
        let catalog = FakeCatalog::default();
        let mut session = session(&catalog);
        session.set_title_filter("React");

        let query = session.start_lookup().unwrap();
        assert!(query.is_some());
        assert!(session.search_in_flight());

        // A second trigger performs no lookup and leaves the flag up.
        assert!(session.start_lookup().unwrap().is_none());
        assert!(session.search_in_flight());

        session.finish_lookup(Ok(vec![description("Done", "")]));
        assert!(!session.search_in_flight());
        assert_eq!(session.results().len(), 1);
    }

    #[tokio::test]
    async fn test_filters_shape_the_query() {
        let catalog = FakeCatalog::default();
        catalog.push_results(Vec::new());

        let mut session = SearchSession::new(catalog.clone(), 20);
        session.set_title_filter("React");
        session.trigger_search().await.unwrap();

        let queries = catalog.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].filter_expression(), "intitle:React");
        assert_eq!(queries[0].max_results(), 20);
    }

    #[tokio::test]
    async fn test_filters_take_effect_on_next_trigger_only() {
        let catalog = FakeCatalog::default();
        catalog.push_results(Vec::new());
        catalog.push_results(Vec::new());

        let mut session = SearchSession::new(catalog.clone(), 10);
        session.set_title_filter("first");
        session.trigger_search().await.unwrap();

        session.set_author_filter("second");
        session.trigger_search().await.unwrap();

        let queries = catalog.queries();
        assert_eq!(queries[0].filter_expression(), "intitle:first");
        assert_eq!(
            queries[1].filter_expression(),
            "intitle:first+inauthor:second"
        );
    }

    #[tokio::test]
    async fn test_select_result_does_not_mutate_results() {
        let catalog = FakeCatalog::default();
        catalog.push_results(vec![description("A", ""), description("B", "")]);

        let mut session = session(&catalog);
        session.set_title_filter("x");
        session.trigger_search().await.unwrap();

        let picked = session.select_result(1).cloned();
        assert_eq!(picked, Some(description("B", "")));
        assert_eq!(session.results().len(), 2);

        assert!(session.select_result(5).is_none());
    }

    #[test]
    fn test_reset_clears_filters_and_results() {
        let catalog = FakeCatalog::default();
        let mut session = session(&catalog);
        session.set_title_filter("React");

        session.finish_lookup(Ok(vec![description("A", "")]));
        session.reset();

        assert!(session.results().is_empty());
        let err = session.start_lookup().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCriteria));
    }
}
