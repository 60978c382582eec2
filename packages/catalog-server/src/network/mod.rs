//! HTTP surface: configuration, handlers, error mapping, and server lifecycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod module;

pub use config::NetworkConfig;
pub use error::ApiError;
pub use handlers::AppState;
pub use module::NetworkModule;
