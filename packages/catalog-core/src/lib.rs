//! Movie Catalog Core — domain records, query vocabulary, and error taxonomy.

pub mod error;
pub mod query;
pub mod record;

pub use error::CatalogError;
pub use query::{ListQuery, SearchColumn, SortField, SortOrder};
pub use record::{MovieDraft, MovieRecord};

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
