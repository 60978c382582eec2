//! Single-slot snapshot cache for the full movie collection.
//!
//! Holds at most one [`CachedSnapshot`] behind an `RwLock`. The slot is
//! populated lazily by the catalog service and patched in place on writes
//! (write-through) instead of being invalidated, so reads after a write
//! stay fresh without a full reload. An expired snapshot reads as cold.

use std::time::{Duration, Instant};

use catalog_core::MovieRecord;
use parking_lot::RwLock;

/// Expiry configuration for the snapshot slot.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an installed snapshot stays live.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // Fixed 24-hour horizon from population.
            ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// The cached copy of the full record collection at a point in time.
struct CachedSnapshot {
    movies: Vec<MovieRecord>,
    expires_at: Instant,
}

impl CachedSnapshot {
    fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Outcome of a point lookup against the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotLookup {
    /// The snapshot is live and contains the record.
    Found(MovieRecord),
    /// The snapshot is live and the id is not in it. The snapshot is the
    /// full collection, so this means the record is not in the store either.
    NotFound,
    /// No live snapshot exists; the caller must fall through to the store.
    Cold,
}

/// Process-wide snapshot slot. Mutated only through its own methods.
pub struct SnapshotCache {
    slot: RwLock<Option<CachedSnapshot>>,
    ttl: Duration,
}

impl SnapshotCache {
    /// Creates an empty (cold) cache.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: config.ttl,
        }
    }

    /// Returns a copy of the snapshot if one is live, `None` otherwise.
    #[must_use]
    pub fn live(&self) -> Option<Vec<MovieRecord>> {
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|snapshot| snapshot.is_live())
            .map(|snapshot| snapshot.movies.clone())
    }

    /// Installs a fresh snapshot with a new expiry horizon.
    ///
    /// Concurrent cold loads may both reach this point; last write wins,
    /// which is safe because the underlying data is idempotent to reload.
    pub fn install(&self, movies: Vec<MovieRecord>) {
        let snapshot = CachedSnapshot {
            movies,
            expires_at: Instant::now() + self.ttl,
        };
        *self.slot.write() = Some(snapshot);
    }

    /// Scans the live snapshot for a record with the given id.
    #[must_use]
    pub fn peek(&self, id: u64) -> SnapshotLookup {
        let slot = self.slot.read();
        match slot.as_ref().filter(|snapshot| snapshot.is_live()) {
            Some(snapshot) => snapshot
                .movies
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .map_or(SnapshotLookup::NotFound, SnapshotLookup::Found),
            None => SnapshotLookup::Cold,
        }
    }

    /// Appends a newly inserted record to the live snapshot.
    ///
    /// No-op when the cache is cold: the next full load picks the record up
    /// from the store.
    pub fn on_insert(&self, record: MovieRecord) {
        let mut slot = self.slot.write();
        if let Some(snapshot) = slot.as_mut().filter(|snapshot| snapshot.is_live()) {
            snapshot.movies.push(record);
        }
    }

    /// Overwrites the matching entry's fields in the live snapshot.
    ///
    /// No-op when the cache is cold or the id is absent from the snapshot.
    pub fn on_update(&self, record: MovieRecord) {
        let mut slot = self.slot.write();
        if let Some(snapshot) = slot.as_mut().filter(|snapshot| snapshot.is_live()) {
            if let Some(entry) = snapshot.movies.iter_mut().find(|m| m.id == record.id) {
                *entry = record;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_catalog;

    fn warm_cache() -> SnapshotCache {
        let cache = SnapshotCache::new(CacheConfig::default());
        cache.install(sample_catalog());
        cache
    }

    #[test]
    fn cold_cache_has_no_live_snapshot() {
        let cache = SnapshotCache::new(CacheConfig::default());
        assert!(cache.live().is_none());
        assert_eq!(cache.peek(1), SnapshotLookup::Cold);
    }

    #[test]
    fn install_makes_snapshot_live() {
        let cache = warm_cache();
        let movies = cache.live().expect("snapshot should be live");
        assert_eq!(movies.len(), 8);
    }

    #[test]
    fn snapshot_expires_after_ttl() {
        let cache = SnapshotCache::new(CacheConfig {
            ttl: Duration::from_millis(20),
        });
        cache.install(sample_catalog());
        assert!(cache.live().is_some());

        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.live().is_none(), "expired snapshot must read as cold");
        assert_eq!(cache.peek(1), SnapshotLookup::Cold);
    }

    #[test]
    fn peek_finds_record_in_live_snapshot() {
        let cache = warm_cache();
        match cache.peek(5) {
            SnapshotLookup::Found(record) => assert_eq!(record.title, "Aftershock"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn peek_reports_absence_from_live_snapshot() {
        let cache = warm_cache();
        assert_eq!(cache.peek(999), SnapshotLookup::NotFound);
    }

    #[test]
    fn on_insert_appends_to_live_snapshot() {
        let cache = warm_cache();
        let record = sample_catalog()[0].clone();
        let new_record = MovieRecord {
            id: 9,
            title: "Ninth Movie".to_string(),
            ..record
        };

        cache.on_insert(new_record);
        let movies = cache.live().unwrap();
        assert_eq!(movies.len(), 9);
        assert_eq!(movies.last().unwrap().title, "Ninth Movie");
    }

    #[test]
    fn on_insert_is_noop_when_cold() {
        let cache = SnapshotCache::new(CacheConfig::default());
        cache.on_insert(sample_catalog()[0].clone());
        assert!(cache.live().is_none(), "insert must not warm a cold cache");
    }

    #[test]
    fn on_update_patches_matching_entry_in_place() {
        let cache = warm_cache();
        let mut record = sample_catalog()[4].clone();
        record.rating = 5;

        cache.on_update(record);

        let movies = cache.live().unwrap();
        assert_eq!(movies[4].rating, 5);
        assert_eq!(movies[4].id, 5, "patched entry must stay in place");
    }

    #[test]
    fn on_update_leaves_other_entries_untouched() {
        let cache = warm_cache();
        let before = cache.live().unwrap();

        let mut record = sample_catalog()[2].clone();
        record.title = "Renamed".to_string();
        cache.on_update(record.clone());

        let after = cache.live().unwrap();
        for (b, a) in before.iter().zip(after.iter()) {
            if b.id == record.id {
                assert_eq!(a.title, "Renamed");
            } else {
                assert_eq!(b, a);
            }
        }
    }

    #[test]
    fn on_update_with_unknown_id_is_noop() {
        let cache = warm_cache();
        let mut record = sample_catalog()[0].clone();
        record.id = 999;
        cache.on_update(record);
        assert_eq!(cache.live().unwrap().len(), 8);
    }

    #[test]
    fn install_overwrites_previous_snapshot() {
        let cache = warm_cache();
        cache.install(sample_catalog()[..3].to_vec());
        assert_eq!(cache.live().unwrap().len(), 3, "last install wins");
    }
}
