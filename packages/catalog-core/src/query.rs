//! Listing-query vocabulary: search columns, sort fields, sort order.
//!
//! Column names arrive from the HTTP layer as free text. They are parsed
//! into these enums exactly once, at the edge; the query engine only ever
//! sees validated values. Sorting by cast is unsupported, so [`SortField`]
//! simply has no `Cast` variant -- the invalid request is unrepresentable
//! past the parse step.

use serde::{Deserialize, Serialize};

/// A record column that can scope a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchColumn {
    /// Substring match against the title, case-insensitive.
    Title,
    /// Substring match against the genre, case-insensitive.
    Genre,
    /// Exact string match against the release year.
    ReleaseYear,
    /// Exact equality against the classification, case-insensitive.
    Classification,
    /// Exact string match against the numeric rating.
    Rating,
    /// Substring match against any cast entry, case-insensitive.
    Cast,
}

impl SearchColumn {
    /// Parses a column name, case-insensitively.
    ///
    /// Accepts both `releasedate` (the original wire name) and
    /// `releaseyear` for the year column. Returns `None` for anything
    /// that does not name a record field.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "genre" => Some(Self::Genre),
            "releasedate" | "releaseyear" => Some(Self::ReleaseYear),
            "classification" => Some(Self::Classification),
            "rating" => Some(Self::Rating),
            "cast" => Some(Self::Cast),
            _ => None,
        }
    }
}

/// A record field the listing can be sorted by.
///
/// Deliberately has no `Cast` variant: sorting by cast is rejected at the
/// HTTP layer, and the engine does not defend against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Sort by title.
    Title,
    /// Sort by genre.
    Genre,
    /// Sort by release year.
    ReleaseYear,
    /// Sort by classification.
    Classification,
    /// Sort by numeric rating.
    Rating,
}

impl SortField {
    /// Parses a sort field name, case-insensitively.
    ///
    /// `cast` is not accepted here; callers that want a distinct rejection
    /// message for it must check before parsing.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "genre" => Some(Self::Genre),
            "releasedate" | "releaseyear" => Some(Self::ReleaseYear),
            "classification" => Some(Self::Classification),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Sort direction. Defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Parses `asc` / `desc`, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A fully validated listing request.
///
/// Built by the HTTP layer after validating its query parameters; the
/// catalog service and query engine perform no re-validation.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Column scope for the search, or `None` to search the default
    /// cross-column set.
    pub column: Option<SearchColumn>,
    /// Search text. Empty means no filtering.
    pub search_key: String,
    /// Field to sort by, or `None` to keep store order.
    pub sort_field: Option<SortField>,
    /// Sort direction.
    pub sort_order: SortOrder,
}
