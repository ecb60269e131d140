//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    redsky::RedSkySettings,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod redsky;
pub(crate) mod server;

/// myRetail JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "myretail-json", about = "myRetail product API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Metrics and slow request settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Price store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Title provider settings.
    #[command(flatten)]
    pub redsky: RedSkySettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
