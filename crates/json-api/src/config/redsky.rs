//! RedSky Config

use std::time::Duration;

use clap::Args;

use myretail_app::domain::titles::{RedSkyConfig, RetryPolicy};

/// Title provider settings.
#[derive(Debug, Args)]
pub struct RedSkySettings {
    /// RedSky base address
    #[arg(
        id = "redsky_host",
        long = "redsky-host",
        env = "REDSKY_HOST",
        default_value = "https://redsky.target.com"
    )]
    pub host: String,

    /// RedSky API version
    #[arg(
        id = "redsky_version",
        long = "redsky-version",
        env = "REDSKY_VERSION",
        default_value_t = 3
    )]
    pub version: u32,

    /// RedSky API key; empty to omit
    #[arg(
        id = "redsky_key",
        long = "redsky-key",
        env = "REDSKY_KEY",
        default_value = "candidate"
    )]
    pub key: String,

    /// Total attempts per title lookup
    #[arg(
        id = "redsky_attempts",
        long = "redsky-attempts",
        env = "REDSKY_ATTEMPTS",
        default_value_t = 3
    )]
    pub attempts: u32,

    /// Fixed delay between attempts in milliseconds
    #[arg(
        long = "redsky-retry-delay-ms",
        env = "REDSKY_RETRY_DELAY_MS",
        default_value_t = 200
    )]
    pub retry_delay_ms: u64,

    /// Per-attempt HTTP timeout in milliseconds
    #[arg(
        long = "redsky-timeout-ms",
        env = "REDSKY_TIMEOUT_MS",
        default_value_t = 2_000
    )]
    pub timeout_ms: u64,
}

impl RedSkySettings {
    #[must_use]
    pub fn client_config(&self) -> RedSkyConfig {
        let key = self.key.trim();

        RedSkyConfig {
            host: self.host.clone(),
            version: self.version,
            key: (!key.is_empty()).then(|| key.to_string()),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.attempts, Duration::from_millis(self.retry_delay_ms))
    }
}
