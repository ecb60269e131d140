//! RedSky HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::debug;

use crate::{
    domain::titles::{
        errors::TitleProviderError,
        models::{ProductTitle, RedSkyResponse},
    },
    ids::ProductId,
};

/// Upstream fields stripped from the product payload.
pub const EXCLUDED_FIELDS: &str = "taxonomy,price,promotion,bulk_ship,rating_and_review_reviews,rating_and_review_statistics,question_answer_statistics";

/// Source of product titles.
#[automock]
#[async_trait]
pub trait TitleProvider: Send + Sync {
    /// Perform one call for the title of `id`. Callers own any retrying.
    async fn fetch_title(&self, id: ProductId) -> Result<ProductTitle, TitleProviderError>;
}

/// Configuration for the RedSky catalog API.
#[derive(Debug, Clone)]
pub struct RedSkyConfig {
    /// Base address, e.g. `"https://redsky.target.com"`.
    pub host: String,

    /// API version segment, rendered as `/v{version}`.
    pub version: u32,

    /// Optional `key` query parameter.
    pub key: Option<String>,

    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for RedSkyConfig {
    fn default() -> Self {
        Self {
            host: "https://redsky.target.com".to_string(),
            version: 3,
            key: Some("candidate".to_string()),
            timeout: Duration::from_secs(2),
        }
    }
}

/// HTTP [`TitleProvider`] for RedSky.
#[derive(Debug, Clone)]
pub struct RedSkyClient {
    config: RedSkyConfig,
    http: Client,
}

impl RedSkyClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: RedSkyConfig) -> Result<Self, TitleProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Product detail URL for `id`.
    pub fn product_url(&self, id: ProductId) -> String {
        let mut url = format!(
            "{}/v{}/pdp/tcin/{id}?excludes={EXCLUDED_FIELDS}",
            self.config.host.trim_end_matches('/'),
            self.config.version,
        );

        if let Some(key) = self.config.key.as_deref().filter(|key| !key.is_empty()) {
            url.push_str("&key=");
            url.push_str(key);
        }

        url
    }
}

#[async_trait]
impl TitleProvider for RedSkyClient {
    async fn fetch_title(&self, id: ProductId) -> Result<ProductTitle, TitleProviderError> {
        let url = self.product_url(id);

        debug!(%url, "requesting redsky product");

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(TitleProviderError::UnexpectedStatus { status });
        }

        response
            .json::<RedSkyResponse>()
            .await?
            .into_title()
            .ok_or(TitleProviderError::MissingTitle)
    }
}
