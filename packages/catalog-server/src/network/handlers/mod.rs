//! Request handlers and the shared application state.

pub mod health;
pub mod movies;

use std::sync::Arc;
use std::time::Instant;

use crate::service::CatalogService;

pub use health::health_handler;
pub use movies::{
    create_movie_handler, get_movie_handler, list_movies_handler, update_movie_handler,
};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// The catalog service facade.
    pub service: Arc<CatalogService>,
    /// Process start time, reported by the health endpoint.
    pub start_time: Instant,
}
