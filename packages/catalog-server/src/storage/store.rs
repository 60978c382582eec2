//! The [`MovieStore`] trait and its latency configuration.
//!
//! The catalog service consumes the store as `Arc<dyn MovieStore>` so tests
//! can substitute instrumented doubles for the real table.

use std::time::Duration;

use async_trait::async_trait;
use catalog_core::{CatalogError, MovieDraft, MovieRecord};

/// Simulated I/O latency for store reads.
///
/// The backing table stands in for a slow external data source: full-table
/// enumeration is expensive (the reference behavior sleeps ~2 s) and point
/// lookups are modestly slow (~100 ms). Tests construct a zero-latency
/// config via [`StoreConfig::instant`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Sleep applied before a full-table read.
    pub get_all_latency: Duration,
    /// Sleep applied before a point lookup.
    pub get_by_id_latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            get_all_latency: Duration::from_secs(2),
            get_by_id_latency: Duration::from_millis(100),
        }
    }
}

impl StoreConfig {
    /// Zero-latency config for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            get_all_latency: Duration::ZERO,
            get_by_id_latency: Duration::ZERO,
        }
    }
}

/// Sole authority over persisted movie records.
///
/// Implementations must serialize all mutating operations and full-table
/// enumeration against the shared table: no reader may observe a partially
/// applied insert or update. Identifier assignment happens exactly once per
/// insert, under the same exclusion as the structural mutation.
///
/// Used as `Arc<dyn MovieStore>`.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns every record currently stored, in store-native order.
    ///
    /// Slow: simulates a costly full-table read. Latency-sensitive callers
    /// must go through the snapshot cache instead of calling this directly.
    ///
    /// # Errors
    ///
    /// Returns an error only on unexpected internal failure.
    async fn get_all(&self) -> Result<Vec<MovieRecord>, CatalogError>;

    /// Returns the record with the given id, or `None` if absent.
    ///
    /// Simulates modest point-lookup latency.
    ///
    /// # Errors
    ///
    /// Returns an error only on unexpected internal failure.
    async fn get_by_id(&self, id: u64) -> Result<Option<MovieRecord>, CatalogError>;

    /// Assigns the next identifier and stores a trimmed, normalized copy of
    /// the draft. Returns the record exactly as stored, so callers can patch
    /// caches with what the store actually persisted.
    ///
    /// # Errors
    ///
    /// [`CatalogError::EmptyTitle`] if the title is empty or whitespace-only.
    async fn insert(&self, draft: MovieDraft) -> Result<MovieRecord, CatalogError>;

    /// Replaces the mutable fields of the record with `record.id`, applying
    /// the same normalization as [`insert`](MovieStore::insert). Returns the
    /// record as stored.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if no record with that id exists;
    /// [`CatalogError::EmptyTitle`] if the title is empty or whitespace-only.
    async fn update(&self, record: &MovieRecord) -> Result<MovieRecord, CatalogError>;
}
