//! The catalog service facade: cache-fronted listing, point lookup with a
//! background warm-up, and write-through create/update.
//!
//! The store write always happens first and is authoritative; patching the
//! cached snapshot is a best-effort follow-up, not a transaction.

use std::sync::Arc;

use catalog_core::{CatalogError, ListQuery, MovieDraft, MovieRecord};
use tracing::{debug, warn};

use super::cache::{SnapshotCache, SnapshotLookup};
use super::query;
use crate::storage::MovieStore;

/// Entry point for the HTTP layer.
///
/// Owns the read path (snapshot cache plus query engine) and the write
/// path (store first, then snapshot patch). All preconditions on listing
/// parameters are the HTTP layer's responsibility; nothing is re-validated
/// here.
pub struct CatalogService {
    store: Arc<dyn MovieStore>,
    cache: Arc<SnapshotCache>,
}

impl CatalogService {
    /// Wires the service over its store and cache.
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>, cache: Arc<SnapshotCache>) -> Self {
        Self { store, cache }
    }

    /// Returns the filtered, sorted listing for a validated query.
    ///
    /// Obtains the snapshot (loading it from the store on a cold cache),
    /// applies the search, then the sort.
    ///
    /// # Errors
    ///
    /// Propagates store failures from a cold-cache load unmodified.
    pub async fn list_movies(&self, query: &ListQuery) -> Result<Vec<MovieRecord>, CatalogError> {
        let movies = self.snapshot().await?;
        let movies = query::search(movies, query.column, &query.search_key);
        let movies = match query.sort_field {
            Some(field) => query::sort(movies, field, query.sort_order),
            None => movies,
        };
        Ok(movies)
    }

    /// Returns the record with the given id, or `None`.
    ///
    /// The live snapshot answers first, for both presence and absence. On a
    /// cold cache the caller falls through to the store's direct lookup
    /// while a full snapshot load runs in the background for the benefit of
    /// later calls. The individually fetched record is deliberately not
    /// written into the cold cache; only the full load populates it.
    ///
    /// # Errors
    ///
    /// Propagates direct-lookup store failures unmodified. Background load
    /// failures are logged and dropped, leaving the cache cold.
    pub async fn get_movie(&self, id: u64) -> Result<Option<MovieRecord>, CatalogError> {
        match self.cache.peek(id) {
            SnapshotLookup::Found(record) => Ok(Some(record)),
            SnapshotLookup::NotFound => Ok(None),
            SnapshotLookup::Cold => {
                self.spawn_background_warm();
                self.store.get_by_id(id).await
            }
        }
    }

    /// Inserts a movie and returns its assigned id.
    ///
    /// The store insert is authoritative; if a snapshot is live, the stored
    /// (normalized) record is appended to it so subsequent listings see the
    /// new movie without a reload.
    ///
    /// # Errors
    ///
    /// [`CatalogError::EmptyTitle`] if the title is blank.
    pub async fn create_movie(&self, draft: MovieDraft) -> Result<u64, CatalogError> {
        let stored = self.store.insert(draft).await?;
        let id = stored.id;
        self.cache.on_insert(stored);
        debug!(id, "movie created");
        Ok(id)
    }

    /// Updates a movie in place.
    ///
    /// The store update is authoritative; if a snapshot is live, its entry
    /// is overwritten with the stored (normalized) record.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown id,
    /// [`CatalogError::EmptyTitle`] for a blank title.
    pub async fn update_movie(&self, record: &MovieRecord) -> Result<(), CatalogError> {
        let stored = self.store.update(record).await?;
        let id = stored.id;
        self.cache.on_update(stored);
        debug!(id, "movie updated");
        Ok(())
    }

    /// Returns the current snapshot, loading it from the store on a miss.
    ///
    /// Concurrent cold callers may each trigger a load; the cache slot
    /// takes the last install, which is safe to reload.
    async fn snapshot(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        if let Some(movies) = self.cache.live() {
            return Ok(movies);
        }
        Self::load_snapshot(Arc::clone(&self.store), Arc::clone(&self.cache)).await
    }

    /// Fire-and-forget snapshot population for a cold cache.
    ///
    /// The spawning caller never observes this task's outcome; a failure
    /// only leaves the snapshot cold for the next attempt.
    fn spawn_background_warm(&self) {
        let store = Arc::clone(&self.store);
        let cache = Arc::clone(&self.cache);
        tokio::spawn(async move {
            if let Err(error) = Self::load_snapshot(store, cache).await {
                warn!(%error, "background snapshot load failed; cache stays cold");
            }
        });
    }

    /// Full-table load followed by a snapshot install.
    async fn load_snapshot(
        store: Arc<dyn MovieStore>,
        cache: Arc<SnapshotCache>,
    ) -> Result<Vec<MovieRecord>, CatalogError> {
        let movies = store.get_all().await?;
        cache.install(movies.clone());
        Ok(movies)
    }
}
