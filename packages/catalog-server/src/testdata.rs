//! Shared test fixture: the well-known 8-movie catalog.

use catalog_core::MovieRecord;

/// Builds one fixture record.
fn movie(
    id: u64,
    title: &str,
    genre: &str,
    classification: &str,
    release_year: i32,
    rating: i32,
    cast: &[&str],
) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        genre: Some(genre.to_string()),
        classification: Some(classification.to_string()),
        release_year,
        rating,
        cast: cast.iter().map(|c| (*c).to_string()).collect(),
    }
}

/// The 8-record catalog used across query, cache, and service tests.
pub(crate) fn sample_catalog() -> Vec<MovieRecord> {
    vec![
        movie(
            1,
            "Olympus Has Fallen",
            "Action Adventure",
            "M15+",
            2013,
            3,
            &["Gerard Butler", "Dylan McDermott", "Aaron Eckhart", "Angela Basset"],
        ),
        movie(
            2,
            "Man of Steel",
            "Action Adventure",
            "M",
            2013,
            3,
            &["Christopher Meloni", "Diane Lane", "Laurence Fishburne", "Amy Adams"],
        ),
        movie(
            3,
            "The Hangover Part III",
            "Comedy",
            "M15+",
            2013,
            1,
            &["Zach Galifianakis", "Melissa McCarthy", "Heather Graham", "Ed Helms", "Sasha Barrese"],
        ),
        movie(4, "The Bling Ring", "Drama", "M15+", 2014, 3, &["Varun Mehta"]),
        movie(5, "Aftershock", "Horror", "R", 2012, 3, &["Cast A", "Cast B"]),
        movie(6, "The Fly", "Science Fiction", "M15+", 2016, 4, &["Fly 1", "Fly 2"]),
        movie(
            7,
            "The Nightmare Before Christmas",
            "Cartoon",
            "G",
            1993,
            4,
            &["Cartoon 1", "Cartoon 2"],
        ),
        movie(
            8,
            "Angels and Demons",
            "Thriller",
            "M15+",
            2009,
            4,
            &["Angel 1", "Angel 2", "Demons 1", "Demons 2", "Varu M"],
        ),
    ]
}
