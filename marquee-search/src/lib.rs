//! Marquee Search - catalog client and search state machines
//!
//! Everything stateful in Marquee lives here: the remote catalog
//! client, the search/pagination controller, the detail loader, and
//! the pagination display algorithm. The machines are plain owned
//! structs mutated only through named transition functions; fetches
//! are split into a begin step that issues a sequenced request ticket
//! and an apply step that consumes the completion, so a stale response
//! can never overwrite newer state.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]

pub mod client;
pub mod controller;
pub mod detail;
pub mod errors;
pub mod pagination;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use client::{CatalogClient, OmdbClient};
pub use controller::{ListPhase, ListRequest, SearchController};
pub use detail::{DetailLoader, DetailPhase, DetailRequest};
pub use errors::CatalogError;
pub use pagination::{PageMark, page_marks};
pub use types::{KindFilter, MediaKind, SearchPage, SearchQuery, TitleDetail, TitleSummary};

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
