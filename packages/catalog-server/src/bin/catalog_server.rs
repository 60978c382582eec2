//! Movie catalog server binary.
//!
//! Wires the seeded in-memory store, the snapshot cache, and the catalog
//! service into the HTTP module, then serves until SIGINT/SIGTERM.

use std::sync::Arc;

use catalog_server::network::{NetworkConfig, NetworkModule};
use catalog_server::service::{CacheConfig, CatalogService, SnapshotCache};
use catalog_server::storage::{InMemoryMovieStore, StoreConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Movie catalog HTTP server.
#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about)]
struct Args {
    /// Bind address.
    #[arg(long, default_value = "0.0.0.0", env = "CATALOG_HOST")]
    host: String,

    /// Port to listen on. 0 means OS-assigned.
    #[arg(long, default_value_t = 8080, env = "CATALOG_PORT")]
    port: u16,

    /// Log filter directive (tracing `EnvFilter` syntax).
    #[arg(long, default_value = "info", env = "CATALOG_LOG")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log)?)
        .init();

    // Seed failure is fatal at startup; there is no per-request recovery
    // from an unavailable table.
    let store = Arc::new(InMemoryMovieStore::from_embedded_seed(
        StoreConfig::default(),
    )?);
    let cache = Arc::new(SnapshotCache::new(CacheConfig::default()));
    let service = Arc::new(CatalogService::new(store, cache));

    let config = NetworkConfig {
        host: args.host,
        port: args.port,
        ..NetworkConfig::default()
    };

    let mut network = NetworkModule::new(config, service);
    let port = network.start().await?;
    info!(port, "catalog server ready");

    network.serve(shutdown_signal()).await
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
