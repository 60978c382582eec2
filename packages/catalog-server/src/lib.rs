//! Movie catalog server — axum HTTP surface over a lazily cached in-memory record store.

pub mod network;
pub mod service;
pub mod storage;

#[cfg(test)]
pub(crate) mod testdata;
