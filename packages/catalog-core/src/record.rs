//! Movie record types shared by the store, the cache, and the HTTP layer.

use serde::{Deserialize, Serialize};

/// A stored movie record.
///
/// The `id` is assigned by the record store at insert time and never
/// reassigned. A stored record's title is never empty: the store trims it
/// and rejects blank titles before anything reaches this type's consumers.
///
/// Serializes with camelCase keys (`releaseYear`, `movieId` stays `id`)
/// so the JSON surface matches what API clients already expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Unique store-assigned identifier.
    pub id: u64,
    /// Movie title. Non-empty after trimming for any stored record.
    pub title: String,
    /// Genre, if known.
    pub genre: Option<String>,
    /// Classification / rating category (e.g. "M15+"), if known.
    pub classification: Option<String>,
    /// Release year.
    pub release_year: i32,
    /// Numeric rating.
    pub rating: i32,
    /// Ordered cast list. May be empty.
    #[serde(default)]
    pub cast: Vec<String>,
}

/// Payload for creating a movie: a [`MovieRecord`] minus the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    /// Movie title. Must be non-blank; the store rejects it otherwise.
    pub title: String,
    /// Genre, if known.
    pub genre: Option<String>,
    /// Classification / rating category, if known.
    pub classification: Option<String>,
    /// Release year.
    pub release_year: i32,
    /// Numeric rating.
    pub rating: i32,
    /// Ordered cast list. May be empty.
    #[serde(default)]
    pub cast: Vec<String>,
}

impl MovieDraft {
    /// Attaches a store-assigned id, producing a full [`MovieRecord`].
    #[must_use]
    pub fn with_id(self, id: u64) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            genre: self.genre,
            classification: self.classification,
            release_year: self.release_year,
            rating: self.rating,
            cast: self.cast,
        }
    }
}
