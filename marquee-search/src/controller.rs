//! Search/pagination state machine.
//!
//! The controller owns everything the result-grid side of the UI
//! displays: the editable draft query, the query committed at the last
//! submit, the current page, the loaded result page, and the list
//! error. It never performs I/O itself. Fetch-triggering transitions
//! return a [`ListRequest`] ticket; the caller runs the catalog call
//! and feeds the outcome back through [`SearchController::apply`].
//! Each ticket carries a sequence number so a response that arrives
//! after a newer request was issued is dropped instead of overwriting
//! newer state.

use crate::errors::CatalogError;
use crate::types::{KindFilter, SearchPage, SearchQuery};

/// List-channel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// No query has ever been submitted.
    Idle,
    /// A search or page change is in flight.
    Loading,
    /// A page with at least one result is loaded.
    Loaded,
    /// The catalog answered successfully with zero results.
    Empty,
    /// The last fetch failed; results are cleared.
    Failed,
}

/// Ticket for one list fetch: what to ask the catalog, and the
/// sequence number that must still be current when the answer lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// Sequence number of this request on the list channel.
    pub seq: u64,
    /// Query to send, filters locked at submit time.
    pub query: SearchQuery,
    /// Page to request, 1-based.
    pub page: u32,
}

/// The search/pagination controller.
#[derive(Debug)]
pub struct SearchController {
    draft: SearchQuery,
    committed: SearchQuery,
    page: u32,
    results: Option<SearchPage>,
    error: Option<String>,
    phase: ListPhase,
    seq: u64,
}

impl SearchController {
    /// Creates a controller with nothing submitted yet.
    pub fn new() -> Self {
        Self {
            draft: SearchQuery::default(),
            committed: SearchQuery::default(),
            page: 1,
            results: None,
            error: None,
            phase: ListPhase::Idle,
            seq: 0,
        }
    }

    /// Updates the draft search text. Never triggers a fetch.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// Updates the draft kind filter. Never triggers a fetch.
    pub fn edit_kind(&mut self, kind: Option<KindFilter>) {
        self.draft.kind = kind;
    }

    /// Updates the draft year filter. Never triggers a fetch.
    pub fn edit_year(&mut self, year: Option<String>) {
        self.draft.year = year;
    }

    /// Submits the draft query, targeting page 1.
    ///
    /// A draft whose trimmed text is empty is a no-op: no state
    /// changes and no request is issued. Otherwise the draft becomes
    /// the committed query, the phase moves to `Loading`, and any
    /// previous error is cleared.
    pub fn submit(&mut self) -> Option<ListRequest> {
        if !self.draft.is_submittable() {
            return None;
        }

        self.committed = self.draft.normalized();
        Some(self.begin_fetch(1))
    }

    /// Requests page `n` of the committed query.
    ///
    /// Rejected (no-op) outside `1..=total_pages`, while a fetch is
    /// already in flight, or before anything was submitted. Filter
    /// edits made since the last submit are deliberately ignored; they
    /// only take effect on the next explicit submit.
    pub fn change_page(&mut self, n: u32) -> Option<ListRequest> {
        if self.phase == ListPhase::Loading || self.phase == ListPhase::Idle {
            return None;
        }
        if n < 1 || n > self.total_pages() {
            return None;
        }

        Some(self.begin_fetch(n))
    }

    fn begin_fetch(&mut self, page: u32) -> ListRequest {
        self.seq += 1;
        self.phase = ListPhase::Loading;
        self.error = None;
        tracing::debug!(seq = self.seq, page, text = %self.committed.text, "list fetch begins");
        ListRequest {
            seq: self.seq,
            query: self.committed.clone(),
            page,
        }
    }

    /// Applies a fetch outcome.
    ///
    /// An outcome whose sequence number is not the latest issued is
    /// dropped: a newer request supersedes interest in it.
    pub fn apply(&mut self, seq: u64, outcome: Result<SearchPage, CatalogError>) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "dropping stale list response");
            return;
        }

        match outcome {
            Ok(results) => {
                self.page = results.page;
                self.phase = if results.items.is_empty() {
                    ListPhase::Empty
                } else {
                    ListPhase::Loaded
                };
                self.results = Some(results);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "list fetch failed");
                self.phase = ListPhase::Failed;
                self.error = Some(error.to_string());
                self.results = None;
            }
        }
    }

    /// Clears the error message. Loaded state and phase are untouched.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Current phase of the list channel.
    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Whether a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// The loaded result page, if any.
    pub fn results(&self) -> Option<&SearchPage> {
        self.results.as_ref()
    }

    /// The stored list error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Page of the last applied results, 1-based.
    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Pages the current result set spans; 0 when nothing is loaded.
    pub fn total_pages(&self) -> u32 {
        self.results.as_ref().map_or(0, SearchPage::total_pages)
    }

    /// Total matches behind the current result set; 0 when cleared.
    pub fn total_count(&self) -> u32 {
        self.results.as_ref().map_or(0, |results| results.total_count)
    }

    /// The editable draft query, as the form should display it.
    pub fn draft(&self) -> &SearchQuery {
        &self.draft
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{page_of, summaries};

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut controller = SearchController::new();
        controller.edit_text("   ");
        assert!(controller.submit().is_none());
        assert_eq!(controller.phase(), ListPhase::Idle);
        assert!(controller.results().is_none());
    }

    #[test]
    fn submit_passes_through_loading_to_loaded() {
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");

        let request = controller.submit().expect("submittable");
        assert_eq!(controller.phase(), ListPhase::Loading);
        assert_eq!(request.page, 1);
        assert_eq!(request.query.text, "Matrix");

        controller.apply(request.seq, Ok(page_of(summaries(3), 30, 1)));
        assert_eq!(controller.phase(), ListPhase::Loaded);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.total_pages(), 3);
    }

    #[test]
    fn zero_results_with_success_envelope_is_empty() {
        let mut controller = SearchController::new();
        controller.edit_text("obscure");

        let request = controller.submit().unwrap();
        controller.apply(request.seq, Ok(page_of(Vec::new(), 0, 1)));
        assert_eq!(controller.phase(), ListPhase::Empty);
    }

    #[test]
    fn failure_clears_results_and_total_count() {
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        let request = controller.submit().unwrap();
        controller.apply(request.seq, Ok(page_of(summaries(3), 30, 1)));

        controller.edit_text("zzzznomatch");
        let request = controller.submit().unwrap();
        controller.apply(
            request.seq,
            Err(CatalogError::Service {
                message: "Movie not found!".to_string(),
            }),
        );

        assert_eq!(controller.phase(), ListPhase::Failed);
        assert_eq!(controller.error(), Some("Movie not found!"));
        assert!(controller.results().is_none());
        assert_eq!(controller.total_count(), 0);
        assert_eq!(controller.total_pages(), 0);
    }

    #[test]
    fn loading_clears_previous_error() {
        let mut controller = SearchController::new();
        controller.edit_text("zzzznomatch");
        let request = controller.submit().unwrap();
        controller.apply(
            request.seq,
            Err(CatalogError::Service {
                message: "Movie not found!".to_string(),
            }),
        );
        assert!(controller.error().is_some());

        controller.edit_text("Matrix");
        controller.submit().unwrap();
        assert_eq!(controller.phase(), ListPhase::Loading);
        assert!(controller.error().is_none());
    }

    #[test]
    fn change_page_rejected_out_of_bounds_and_while_loading() {
        let mut controller = SearchController::new();
        assert!(controller.change_page(1).is_none(), "nothing submitted yet");

        controller.edit_text("Matrix");
        let request = controller.submit().unwrap();
        assert!(controller.change_page(2).is_none(), "still loading");

        controller.apply(request.seq, Ok(page_of(summaries(10), 30, 1)));
        assert!(controller.change_page(0).is_none());
        assert!(controller.change_page(4).is_none(), "only 3 pages");
        assert!(controller.change_page(3).is_some());
    }

    #[test]
    fn change_page_uses_filters_committed_at_submit_time() {
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        controller.edit_kind(Some(KindFilter::Movie));
        let request = controller.submit().unwrap();
        controller.apply(request.seq, Ok(page_of(summaries(10), 30, 1)));

        // Edits after the submit must not leak into page changes.
        controller.edit_kind(Some(KindFilter::Series));
        controller.edit_year(Some("2003".to_string()));
        controller.edit_text("Reloaded");

        let request = controller.change_page(2).expect("page 2 of 3");
        assert_eq!(request.page, 2);
        assert_eq!(request.query.text, "Matrix");
        assert_eq!(request.query.kind, Some(KindFilter::Movie));
        assert_eq!(request.query.year, None);
    }

    #[test]
    fn current_page_updates_only_when_results_apply() {
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        let request = controller.submit().unwrap();
        controller.apply(request.seq, Ok(page_of(summaries(10), 30, 1)));

        let request = controller.change_page(2).unwrap();
        assert_eq!(controller.current_page(), 1, "not updated eagerly");
        controller.apply(request.seq, Ok(page_of(summaries(10), 30, 2)));
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_state() {
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        let first = controller.submit().unwrap();

        controller.edit_text("Inception");
        let second = controller.submit().unwrap();

        // The first response arrives late, after a newer submit.
        controller.apply(first.seq, Ok(page_of(summaries(10), 300, 1)));
        assert_eq!(controller.phase(), ListPhase::Loading, "still waiting");
        assert!(controller.results().is_none());

        controller.apply(second.seq, Ok(page_of(summaries(2), 2, 1)));
        assert_eq!(controller.phase(), ListPhase::Loaded);
        assert_eq!(controller.total_count(), 2);
    }

    #[test]
    fn dismiss_clears_message_but_not_phase() {
        let mut controller = SearchController::new();
        controller.edit_text("zzzznomatch");
        let request = controller.submit().unwrap();
        controller.apply(
            request.seq,
            Err(CatalogError::Service {
                message: "Movie not found!".to_string(),
            }),
        );

        controller.dismiss_error();
        assert!(controller.error().is_none());
        assert_eq!(controller.phase(), ListPhase::Failed);
    }
}
