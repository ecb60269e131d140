//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::{
        prices::{InMemoryPriceStore, PgPriceStore, PriceStore, seed::sample_prices},
        products::{ProductsService, RetailProductsService},
        titles::{RedSkyClient, RedSkyConfig, RetryPolicy, TitleProvider, TitleProviderError},
    },
};

/// Start-up failures while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The price database could not be reached.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// Schema migrations failed.
    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),

    /// The RedSky HTTP client could not be built.
    #[error("failed to build title provider client")]
    TitleProvider(#[source] TitleProviderError),
}

/// Shared application services
#[derive(Clone)]
pub struct AppContext {
    /// Product reads and price updates.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build a context from explicit collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn PriceStore>,
        titles: Arc<dyn TitleProvider>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            products: Arc::new(RetailProductsService::new(store, titles, retry)),
        }
    }

    /// Build application context from settings.
    ///
    /// Without a database URL, prices are served from an in-memory store
    /// seeded with the sample catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating the database fails, or
    /// when the HTTP client for the title provider cannot be built.
    pub async fn from_settings(
        database_url: Option<&str>,
        redsky: RedSkyConfig,
        retry: RetryPolicy,
    ) -> Result<Self, AppInitError> {
        let store: Arc<dyn PriceStore> = match database_url {
            Some(url) => {
                let pool = database::connect(url)
                    .await
                    .map_err(AppInitError::Database)?;

                database::migrate(&pool)
                    .await
                    .map_err(AppInitError::Migrate)?;

                Arc::new(PgPriceStore::new(pool))
            }
            None => {
                let store = InMemoryPriceStore::with_records(sample_prices());

                info!(prices = store.len().await, "using seeded in-memory price store");

                Arc::new(store)
            }
        };

        let titles = RedSkyClient::new(redsky).map_err(AppInitError::TitleProvider)?;

        Ok(Self::new(store, Arc::new(titles), retry))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::ids::ProductId;

    use super::*;

    #[tokio::test]
    async fn without_database_url_serves_seeded_prices() -> TestResult {
        let context =
            AppContext::from_settings(None, RedSkyConfig::default(), RetryPolicy::default())
                .await?;

        let record = context.products.get_price(ProductId::new(345)).await?;

        assert_eq!(record.currency_code, "EUR");

        Ok(())
    }
}
