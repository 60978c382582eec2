//! Seeded in-memory [`MovieStore`] implementation.
//!
//! Owns the canonical table and the identifier counter behind one
//! `parking_lot::Mutex`. The simulated read latency sleeps before the lock
//! is taken, so the lock is never held across an await point.

use catalog_core::{CatalogError, MovieDraft, MovieRecord};
use parking_lot::Mutex;

use super::store::{MovieStore, StoreConfig};

/// Embedded seed catalog, the JSON equivalent of the original XML resource.
const SEED_JSON: &str = include_str!("../../data/seed.json");

/// The canonical table plus the monotonically increasing id counter.
///
/// Both live under one mutex: identifier assignment and structural mutation
/// must be a single critical section so concurrent inserts can neither race
/// on the counter nor interleave partially built rows.
struct TableState {
    rows: Vec<MovieRecord>,
    next_id: u64,
}

/// In-memory record store seeded from the embedded catalog.
pub struct InMemoryMovieStore {
    table: Mutex<TableState>,
    config: StoreConfig,
}

impl InMemoryMovieStore {
    /// Creates a store from the embedded seed catalog.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Unavailable`] if the seed document does not parse.
    /// This is fatal at startup, not a per-request condition.
    pub fn from_embedded_seed(config: StoreConfig) -> Result<Self, CatalogError> {
        let rows: Vec<MovieRecord> = serde_json::from_str(SEED_JSON)
            .map_err(|e| CatalogError::Unavailable {
                reason: format!("seed catalog failed to parse: {e}"),
            })?;
        Ok(Self::with_records(rows, config))
    }

    /// Creates a store over the given records, seeding the id counter from
    /// the maximum existing id.
    #[must_use]
    pub fn with_records(rows: Vec<MovieRecord>, config: StoreConfig) -> Self {
        let max_id = rows.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            table: Mutex::new(TableState {
                rows,
                next_id: max_id,
            }),
            config,
        }
    }

    /// Trims and validates a draft's fields.
    ///
    /// Titles are mandatory after trimming; blank optional fields collapse
    /// to `None`; blank cast entries are dropped.
    fn normalize(draft: MovieDraft) -> Result<MovieDraft, CatalogError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        Ok(MovieDraft {
            title,
            genre: normalize_optional(draft.genre),
            classification: normalize_optional(draft.classification),
            release_year: draft.release_year,
            rating: draft.rating,
            cast: draft
                .cast
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        })
    }
}

/// Collapses a blank-or-missing optional field to `None`, trimming otherwise.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait::async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn get_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        // Simulated slow full-table read; runs before the lock is taken.
        tokio::time::sleep(self.config.get_all_latency).await;
        let table = self.table.lock();
        Ok(table.rows.clone())
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<MovieRecord>, CatalogError> {
        tokio::time::sleep(self.config.get_by_id_latency).await;
        let table = self.table.lock();
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, draft: MovieDraft) -> Result<MovieRecord, CatalogError> {
        let draft = Self::normalize(draft)?;

        let mut table = self.table.lock();
        table.next_id += 1;
        let record = draft.with_id(table.next_id);
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: &MovieRecord) -> Result<MovieRecord, CatalogError> {
        let draft = Self::normalize(MovieDraft {
            title: record.title.clone(),
            genre: record.genre.clone(),
            classification: record.classification.clone(),
            release_year: record.release_year,
            rating: record.rating,
            cast: record.cast.clone(),
        })?;

        let mut table = self.table.lock();
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(CatalogError::NotFound { id: record.id })?;

        *row = draft.with_id(record.id);
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn instant_store() -> InMemoryMovieStore {
        InMemoryMovieStore::from_embedded_seed(StoreConfig::instant())
            .expect("embedded seed should parse")
    }

    fn draft(title: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            genre: Some("Drama".to_string()),
            classification: None,
            release_year: 2020,
            rating: 3,
            cast: vec![],
        }
    }

    #[tokio::test]
    async fn seed_catalog_loads() {
        let store = instant_store();
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].title, "Olympus Has Fallen");
    }

    #[tokio::test]
    async fn insert_continues_after_max_seed_id() {
        let store = instant_store();
        let record = store.insert(draft("New Movie")).await.unwrap();
        assert_eq!(record.id, 9, "counter should seed from the max seed id");
    }

    #[tokio::test]
    async fn insert_rejects_blank_title() {
        let store = instant_store();
        let err = store.insert(draft("   ")).await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle));

        let err = store.insert(draft("")).await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle));
    }

    #[tokio::test]
    async fn insert_normalizes_fields() {
        let store = instant_store();
        let record = store
            .insert(MovieDraft {
                title: "  Padded Title  ".to_string(),
                genre: Some("   ".to_string()),
                classification: Some(" PG ".to_string()),
                release_year: 2021,
                rating: 2,
                cast: vec!["  Lead  ".to_string(), "  ".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(record.title, "Padded Title");
        assert_eq!(record.genre, None, "blank genre collapses to None");
        assert_eq!(record.classification.as_deref(), Some("PG"));
        assert_eq!(record.cast, vec!["Lead"], "blank cast entries are dropped");
    }

    #[tokio::test]
    async fn concurrent_inserts_assign_unique_increasing_ids() {
        let store = Arc::new(instant_store());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(draft(&format!("Movie {i}"))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 32, "no two inserts may share an id");
        assert_eq!(ids.iter().max().copied(), Some(8 + 32));
        assert_eq!(ids.iter().min().copied(), Some(9));
    }

    #[tokio::test]
    async fn get_by_id_finds_seeded_record() {
        let store = instant_store();
        let record = store.get_by_id(5).await.unwrap().unwrap();
        assert_eq!(record.title, "Aftershock");

        assert!(store.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() {
        let store = instant_store();
        let mut record = store.get_by_id(5).await.unwrap().unwrap();
        record.rating = 5;
        record.genre = Some("Disaster".to_string());

        let stored = store.update(&record).await.unwrap();
        assert_eq!(stored.rating, 5);

        let all = store.get_all().await.unwrap();
        let position = all.iter().position(|r| r.id == 5).unwrap();
        assert_eq!(position, 4, "update must not move the row");
        assert_eq!(all[position].genre.as_deref(), Some("Disaster"));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = instant_store();
        let record = draft("Ghost").with_id(424_242);
        let err = store.update(&record).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 424_242 }));
    }

    #[tokio::test]
    async fn update_rejects_blank_title() {
        let store = instant_store();
        let mut record = store.get_by_id(1).await.unwrap().unwrap();
        record.title = "  ".to_string();

        let err = store.update(&record).await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle));

        // The stored row is untouched.
        let stored = store.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.title, "Olympus Has Fallen");
    }

    #[tokio::test]
    async fn update_does_not_disturb_other_rows() {
        let store = instant_store();
        let before = store.get_all().await.unwrap();

        let mut record = before[2].clone();
        record.title = "The Hangover Part IV".to_string();
        store.update(&record).await.unwrap();

        let after = store.get_all().await.unwrap();
        for (b, a) in before.iter().zip(after.iter()) {
            if b.id == record.id {
                assert_eq!(a.title, "The Hangover Part IV");
            } else {
                assert_eq!(b, a, "unrelated rows must be untouched");
            }
        }
    }
}
