//! # ids-server
//!
//! HTTP server for idserver.
//!
//! Startup is gated on configuration reconciliation: database migrations run
//! first, then the desired set of clients, identity resources, API scopes,
//! and seed users is synchronized into the store. Only after reconciliation
//! succeeds does the server bind its listener. A reconciliation failure
//! aborts the process before it can serve a single request.
//!
//! ## Usage
//!
//! ```ignore
//! use ids_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config).await?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod router;

pub use config::ServerConfig;
pub use router::create_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ids_seed::Reconciler;
use ids_storage_sql::{PgConfigStore, PgUserStore};
use sqlx::PgPool;
use tokio::net::TcpListener;

/// The idserver HTTP server.
pub struct Server {
    config: ServerConfig,
    pool: PgPool,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// This initializes the database connection pool and validates the
    /// configuration.
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let pool_config = ids_storage_sql::PoolConfig::new(&config.database_url)
            .max_connections(config.db_max_connections)
            .min_connections(config.db_min_connections)
            .connect_timeout(config.connect_timeout())
            .idle_timeout(Duration::from_secs(600));

        let pool = ids_storage_sql::create_pool(&pool_config).await?;

        tracing::info!("Database connection pool created");

        Ok(Self { config, pool })
    }

    /// Runs the server.
    ///
    /// Migrates the schema, reconciles the configuration store, then serves
    /// HTTP until a shutdown signal arrives.
    pub async fn run(self) -> anyhow::Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");

        self.reconcile().await?;

        let app = create_router();

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Synchronizes the desired configuration into the store.
    async fn reconcile(&self) -> anyhow::Result<()> {
        let config_store = Arc::new(PgConfigStore::new(self.pool.clone()));
        let user_store = Arc::new(PgUserStore::new(self.pool.clone()));

        let reconciler = Reconciler::new(
            config_store.clone(),
            config_store.clone(),
            config_store,
            user_store,
        );

        reconciler.run().await?;
        Ok(())
    }

    /// Returns the database pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
