//! Server lifecycle with deferred startup.
//!
//! `new()` wires shared state, `start()` binds the TCP listener, and
//! `serve()` accepts connections until the shutdown future resolves. The
//! split lets callers (and tests) learn the actual bound port before any
//! traffic is accepted.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::http::header::HeaderName;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::NetworkConfig;
use super::handlers::{
    create_movie_handler, get_movie_handler, health_handler, list_movies_handler,
    update_movie_handler, AppState,
};
use crate::service::CatalogService;

/// Manages the HTTP server lifecycle.
pub struct NetworkModule {
    config: NetworkConfig,
    listener: Option<TcpListener>,
    service: Arc<CatalogService>,
}

impl NetworkModule {
    /// Creates the module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig, service: Arc<CatalogService>) -> Self {
        Self {
            config,
            listener: None,
            service,
        }
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `GET /movies` -- filtered, sorted listing
    /// - `POST /movies` -- create
    /// - `PUT /movies` -- update
    /// - `GET /movies/{id}` -- point lookup
    /// - `GET /health` -- liveness
    ///
    /// Middleware, outermost to innermost: request-id assignment, trace
    /// spans, gzip compression, CORS, request timeout, request-id
    /// propagation to the response.
    #[must_use]
    pub fn build_router(&self) -> Router {
        let state = AppState {
            service: Arc::clone(&self.service),
            start_time: Instant::now(),
        };

        let x_request_id = HeaderName::from_static("x-request-id");

        // ServiceBuilder applies layers outer-to-inner in listed order.
        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(build_cors_layer(&self.config.cors_origins))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.config.request_timeout,
            ))
            .layer(PropagateRequestIdLayer::new(x_request_id));

        Router::new()
            .route(
                "/movies",
                get(list_movies_handler)
                    .post(create_movie_handler)
                    .put(update_movie_handler),
            )
            .route("/movies/{id}", get(get_movie_handler))
            .route("/health", get(health_handler))
            .layer(layers)
            .with_state(state)
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which differs from the configured one
    /// when port 0 is requested (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!("TCP listener bound to {}:{}", self.config.host, port);

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves connections until the shutdown future resolves.
    ///
    /// Consumes `self` because the listener moves into the server.
    ///
    /// # Errors
    ///
    /// Returns an error on a fatal I/O failure.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let router = self.build_router();
        let listener = self
            .listener
            .expect("start() must be called before serve()");

        info!("serving HTTP connections");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Builds the CORS layer from the configured list of allowed origins.
///
/// A wildcard `"*"` allows any origin; otherwise each origin string is
/// parsed into an explicit allowlist.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{CacheConfig, SnapshotCache};
    use crate::storage::{InMemoryMovieStore, StoreConfig};

    fn test_module() -> NetworkModule {
        let store = Arc::new(
            InMemoryMovieStore::from_embedded_seed(StoreConfig::instant()).unwrap(),
        );
        let cache = Arc::new(SnapshotCache::new(CacheConfig::default()));
        let service = Arc::new(CatalogService::new(store, cache));
        NetworkModule::new(NetworkConfig::default(), service)
    }

    #[test]
    fn new_creates_module_without_binding() {
        let module = test_module();
        assert!(module.listener.is_none());
    }

    #[test]
    fn build_router_assembles_routes() {
        let module = test_module();
        let _router = module.build_router();
    }

    #[tokio::test]
    async fn start_binds_to_os_assigned_port() {
        let mut module = test_module();
        let port = module.start().await.expect("start should succeed");
        assert!(port > 0, "OS-assigned port should be > 0");
        assert!(module.listener.is_some());
    }

    #[tokio::test]
    #[should_panic(expected = "start() must be called before serve()")]
    async fn serve_panics_without_start() {
        let module = test_module();
        let _ = module.serve(std::future::pending::<()>()).await;
    }

    #[test]
    fn cors_layer_accepts_explicit_origins() {
        let origins = vec!["http://localhost:3000".to_string()];
        let _cors = build_cors_layer(&origins);
    }
}
