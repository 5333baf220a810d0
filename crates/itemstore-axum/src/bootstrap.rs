//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use itemstore_core::AppCore;
use itemstore_db::StoreFactory;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::create_router;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server (0 picks a free port).
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Load the sample items before accepting requests.
    pub seed_on_start: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
            seed_on_start: false,
        }
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the HTTP port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins. An empty list keeps `AllowAll`.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }

    /// Load the sample items at startup.
    #[must_use]
    pub const fn with_seed_on_start(mut self, seed: bool) -> Self {
        self.seed_on_start = seed;
        self
    }

    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services handlers need. One context owns one item store.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the Axum adapter with a fresh in-memory store.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let core = Arc::new(StoreFactory::build_app_core());

    if config.seed_on_start {
        let total = core.items().seed().await?;
        info!(total, "Seeded item store at startup");
    }

    Ok(AxumContext { core })
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config.cors);

    let addr: SocketAddr = listener.local_addr()?;
    info!("itemstore listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("itemstore shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
