//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        prices::{
            PriceLookup, PriceResult, PriceStore, UpdateCoordinator, data::PriceUpdate,
            records::PriceRecord,
        },
        products::{aggregator::Aggregator, errors::ProductsServiceError, models::ProductView},
        titles::{RetryPolicy, TitleFetcher, TitleProvider, TitleResult},
    },
    ids::ProductId,
};

/// Products Service
#[derive(Debug, Clone)]
pub struct RetailProductsService {
    aggregator: Aggregator,
    updates: UpdateCoordinator,
}

impl RetailProductsService {
    #[must_use]
    pub fn new(
        store: Arc<dyn PriceStore>,
        titles: Arc<dyn TitleProvider>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            aggregator: Aggregator::new(
                PriceLookup::new(Arc::clone(&store)),
                TitleFetcher::new(titles, retry),
            ),
            updates: UpdateCoordinator::new(store),
        }
    }
}

#[async_trait]
impl ProductsService for RetailProductsService {
    async fn get_product_info(&self, id: ProductId) -> Result<ProductView, ProductsServiceError> {
        self.aggregator.get_product_info(id).await
    }

    async fn get_price(&self, id: ProductId) -> PriceResult {
        self.aggregator.prices().fetch(id).await
    }

    async fn get_title(&self, id: ProductId) -> TitleResult {
        self.aggregator.titles().fetch(id).await
    }

    async fn update_price(
        &self,
        id: ProductId,
        update: PriceUpdate,
    ) -> Result<PriceRecord, ProductsServiceError> {
        Ok(self.updates.update_price(id, update).await?)
    }
}

/// Product reads and price updates consumed by the transports.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Resolve price and title concurrently and merge them into one view.
    async fn get_product_info(&self, id: ProductId) -> Result<ProductView, ProductsServiceError>;

    /// Resolve only the price.
    async fn get_price(&self, id: ProductId) -> PriceResult;

    /// Resolve only the title, with retries.
    async fn get_title(&self, id: ProductId) -> TitleResult;

    /// Merge a partial update over an existing price.
    async fn update_price(
        &self,
        id: ProductId,
        update: PriceUpdate,
    ) -> Result<PriceRecord, ProductsServiceError>;
}
