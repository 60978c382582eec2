//! Error taxonomy for the catalog service.
//!
//! Three recoverable-by-the-caller kinds (`EmptyTitle`, `NotFound`,
//! `Unavailable`) plus an `Internal` catch-all for unexpected failures,
//! which propagate unmodified -- the core never swallows or retries them.

/// Errors surfaced by the record store and the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Caller-supplied movie data violates the title invariant.
    #[error("movie title is mandatory")]
    EmptyTitle,
    /// An update targeted an id absent from the store.
    #[error("the movie id {id} does not exist")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },
    /// The backing table failed to initialize. Fatal at startup,
    /// never a per-request condition.
    #[error("movie store is not available: {reason}")]
    Unavailable {
        /// What went wrong while loading the seed data.
        reason: String,
    },
    /// Unexpected internal failure, propagated unmodified to the caller.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
