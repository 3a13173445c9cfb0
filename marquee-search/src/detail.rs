//! Detail-loader state machine.
//!
//! Owns the modal side of the UI: which title is being inspected, its
//! loaded record, and the detail error. Fully independent of the list
//! channel; a detail fetch never blocks list loading and vice versa.
//! Same begin/apply shape as the controller, with its own sequence
//! number.

use crate::errors::CatalogError;
use crate::types::TitleDetail;

/// Detail-channel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// No modal is shown.
    Closed,
    /// Modal visible, fetch in flight, no record yet.
    Opening,
    /// Modal visible with a loaded record.
    Ready,
    /// Modal visible, fetch failed, error surfaced, no record.
    OpenFailed,
}

/// Ticket for one detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Sequence number of this request on the detail channel.
    pub seq: u64,
    /// Identifier to look up.
    pub imdb_id: String,
}

/// The detail loader.
#[derive(Debug)]
pub struct DetailLoader {
    phase: DetailPhase,
    record: Option<TitleDetail>,
    error: Option<String>,
    seq: u64,
}

impl DetailLoader {
    /// Creates a loader with the modal closed.
    pub fn new() -> Self {
        Self {
            phase: DetailPhase::Closed,
            record: None,
            error: None,
            seq: 0,
        }
    }

    /// Opens the modal for `imdb_id` and starts a fetch.
    ///
    /// Any previously held record is discarded immediately so stale
    /// detail is never observable while the new fetch is in flight.
    pub fn select(&mut self, imdb_id: impl Into<String>) -> DetailRequest {
        self.seq += 1;
        self.phase = DetailPhase::Opening;
        self.record = None;
        self.error = None;
        let imdb_id = imdb_id.into();
        tracing::debug!(seq = self.seq, imdb_id, "detail fetch begins");
        DetailRequest {
            seq: self.seq,
            imdb_id,
        }
    }

    /// Applies a fetch outcome; stale sequences are dropped.
    ///
    /// On failure the modal stays open with no record and the message
    /// feeds the shared error banner.
    pub fn apply(&mut self, seq: u64, outcome: Result<TitleDetail, CatalogError>) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "dropping stale detail response");
            return;
        }
        if self.phase == DetailPhase::Closed {
            // Modal was closed while the fetch was in flight.
            return;
        }

        match outcome {
            Ok(record) => {
                self.phase = DetailPhase::Ready;
                self.record = Some(record);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "detail fetch failed");
                self.phase = DetailPhase::OpenFailed;
                self.error = Some(error.to_string());
                self.record = None;
            }
        }
    }

    /// Closes the modal from any phase, discarding the record.
    pub fn close(&mut self) {
        self.phase = DetailPhase::Closed;
        self.record = None;
        self.error = None;
    }

    /// Clears the error message without closing the modal.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Current phase of the detail channel.
    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Whether the modal is visible at all.
    pub fn is_open(&self) -> bool {
        self.phase != DetailPhase::Closed
    }

    /// Whether a detail fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Opening
    }

    /// The loaded record, if any.
    pub fn record(&self) -> Option<&TitleDetail> {
        self.record.as_ref()
    }

    /// The stored detail error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for DetailLoader {
    fn default() -> Self {
        Self::new()
    }
}
