//! Record storage for the movie catalog.
//!
//! Defines [`MovieStore`], the trait the catalog service depends on, and
//! [`InMemoryMovieStore`], the seeded in-memory table that implements it.
//! All table access is serialized by a single mutex; the simulated I/O
//! latency runs outside the lock.

pub mod memory;
pub mod store;

pub use memory::InMemoryMovieStore;
pub use store::{MovieStore, StoreConfig};
