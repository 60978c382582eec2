//! Catalog service layer: snapshot cache, query engine, and service facade.
//!
//! - [`cache`]: the single-slot snapshot cache with time-based expiry and
//!   write-through patching
//! - [`query`]: stateless search and sort over a snapshot
//! - [`catalog`]: the [`CatalogService`] facade the HTTP layer calls

pub mod cache;
pub mod catalog;
pub mod query;

pub use cache::{CacheConfig, SnapshotCache, SnapshotLookup};
pub use catalog::CatalogService;
