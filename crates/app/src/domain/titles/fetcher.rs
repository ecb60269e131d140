//! Title fetching with bounded retries.

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{error, warn};

use crate::{
    domain::titles::{
        client::TitleProvider,
        errors::{TitleProviderError, TitleUnavailable},
        models::ProductTitle,
    },
    ids::ProductId,
};

/// Outcome of resolving a product's title.
pub type TitleResult = Result<ProductTitle, TitleUnavailable>;

/// Fixed-delay retry schedule: `attempts` calls in total, evenly spaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total calls, including the first.
    pub attempts: u32,
    /// Wait between calls.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy.
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// At least one attempt is always made.
    pub const fn attempts(&self) -> u32 {
        if self.attempts == 0 { 1 } else { self.attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200))
    }
}

/// Calls the title provider, retrying any failure on a fixed schedule.
///
/// Non-2xx statuses (4xx included), transport errors and undecodable bodies
/// all count against the same budget. The first success ends the loop.
#[derive(Clone)]
pub struct TitleFetcher {
    provider: Arc<dyn TitleProvider>,
    policy: RetryPolicy,
}

impl TitleFetcher {
    /// Create a fetcher over `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn TitleProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    /// Retry schedule in use.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Resolve the title for `id`.
    #[tracing::instrument(name = "titles.fetch", skip(self), fields(product_id = %id))]
    pub async fn fetch(&self, id: ProductId) -> TitleResult {
        let attempts = self.policy.attempts();
        let mut attempt = 1;

        loop {
            let source: TitleProviderError = match self.provider.fetch_title(id).await {
                Ok(title) => return Ok(title),
                Err(source) => source,
            };

            if attempt >= attempts {
                error!(attempt, attempts, "redsky retries exhausted: {source}");

                return Err(TitleUnavailable { attempts, source });
            }

            warn!(attempt, attempts, "redsky attempt failed: {source}");

            attempt += 1;

            sleep(self.policy.delay).await;
        }
    }
}

impl std::fmt::Debug for TitleFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleFetcher")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
