//! Subcommand definitions.

use clap::{Args, Subcommand};
use itemstore_axum::ServerConfig;
use itemstore_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
}

/// Arguments for `itemstore serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "ITEMSTORE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to serve on
    #[arg(short, long, env = "ITEMSTORE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Load the sample items before accepting requests
    #[arg(long, env = "ITEMSTORE_SEED")]
    pub seed: bool,

    /// Allowed CORS origin (repeatable). All origins are allowed when omitted.
    #[arg(
        long = "cors-origin",
        env = "ITEMSTORE_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    /// Build the server configuration from the parsed flags.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::with_defaults()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_seed_on_start(self.seed)
            .with_allowed_origins(self.cors_origins.clone())
    }
}
