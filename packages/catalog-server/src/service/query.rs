//! Stateless search and sort over a movie snapshot.
//!
//! Both operations assume their inputs were validated at the HTTP edge:
//! the column and sort field arrive as enums, so an unrecognized name can
//! never reach this module. Filtering and sorting never mutate the shared
//! records, only the owned working copy.

use std::cmp::Ordering;

use catalog_core::{MovieRecord, SearchColumn, SortField, SortOrder};

/// Filters the snapshot by the search key.
///
/// A blank key means no filtering. With a column, the column-specific
/// predicate applies; without one, a record matches if any of genre
/// (substring), release year (exact), title (substring), or a cast entry
/// (substring) matches. Text matches are case-insensitive.
#[must_use]
pub fn search(
    movies: Vec<MovieRecord>,
    column: Option<SearchColumn>,
    search_key: &str,
) -> Vec<MovieRecord> {
    let key = search_key.trim();
    if key.is_empty() {
        return movies;
    }

    let key_lower = key.to_lowercase();
    movies
        .into_iter()
        .filter(|movie| match column {
            Some(column) => matches_column(movie, column, key, &key_lower),
            None => matches_any_default_column(movie, key, &key_lower),
        })
        .collect()
}

/// Column-specific match predicate.
fn matches_column(movie: &MovieRecord, column: SearchColumn, key: &str, key_lower: &str) -> bool {
    match column {
        SearchColumn::Title => contains_ci(&movie.title, key_lower),
        SearchColumn::Genre => opt_contains_ci(movie.genre.as_deref(), key_lower),
        SearchColumn::ReleaseYear => movie.release_year.to_string() == key,
        SearchColumn::Classification => movie
            .classification
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(key)),
        SearchColumn::Rating => movie.rating.to_string() == key,
        SearchColumn::Cast => movie.cast.iter().any(|name| contains_ci(name, key_lower)),
    }
}

/// Cross-column OR: genre, release year, title, cast.
///
/// Classification and rating are deliberately excluded from the default
/// search set; they are only reachable with an explicit column scope.
fn matches_any_default_column(movie: &MovieRecord, key: &str, key_lower: &str) -> bool {
    opt_contains_ci(movie.genre.as_deref(), key_lower)
        || movie.release_year.to_string() == key
        || contains_ci(&movie.title, key_lower)
        || movie.cast.iter().any(|name| contains_ci(name, key_lower))
}

/// Case-insensitive substring test. `needle_lower` is pre-lowercased.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn opt_contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle_lower))
}

/// Stable-sorts the snapshot by one field.
///
/// String fields compare case-insensitively; absent optional fields order
/// before present ones. Descending uses the reversed comparator, so ties
/// keep their store order in both directions.
#[must_use]
pub fn sort(mut movies: Vec<MovieRecord>, field: SortField, order: SortOrder) -> Vec<MovieRecord> {
    movies.sort_by(|a, b| match order {
        SortOrder::Asc => compare_by_field(a, b, field),
        SortOrder::Desc => compare_by_field(b, a, field),
    });
    movies
}

fn compare_by_field(a: &MovieRecord, b: &MovieRecord, field: SortField) -> Ordering {
    match field {
        SortField::Title => compare_ci(&a.title, &b.title),
        SortField::Genre => compare_opt_ci(a.genre.as_deref(), b.genre.as_deref()),
        SortField::ReleaseYear => a.release_year.cmp(&b.release_year),
        SortField::Classification => {
            compare_opt_ci(a.classification.as_deref(), b.classification.as_deref())
        }
        SortField::Rating => a.rating.cmp(&b.rating),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// `None` orders before `Some`, mirroring how the original table sorted
/// null columns first.
fn compare_opt_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_ci(a, b),
    }
}
