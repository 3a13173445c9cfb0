//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while querying the remote catalog.
///
/// `Service` carries the catalog's own failure message verbatim (for
/// example "Movie not found!") so it can be shown to the user as-is;
/// its `Display` is the bare message.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure or non-success HTTP status.
    #[error("Transport error: {reason}")]
    Transport {
        /// What went wrong at the transport level
        reason: String,
    },

    /// The catalog answered but signaled a logical failure.
    #[error("{message}")]
    Service {
        /// The catalog-supplied failure message
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {reason}")]
    Parse {
        /// Why decoding failed
        reason: String,
    },

    /// The query was rejected before any request was made.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected
        reason: String,
    },
}
