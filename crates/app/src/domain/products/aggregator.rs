//! Concurrent price and title aggregation.

use tracing::Instrument;

use crate::{
    domain::{
        prices::PriceLookup,
        products::{errors::ProductsServiceError, models::ProductView},
        titles::TitleFetcher,
    },
    ids::ProductId,
};

/// Resolves price and title for a product at the same time and merges them.
#[derive(Debug, Clone)]
pub struct Aggregator {
    prices: PriceLookup,
    titles: TitleFetcher,
}

impl Aggregator {
    /// Create an aggregator from both sources.
    #[must_use]
    pub fn new(prices: PriceLookup, titles: TitleFetcher) -> Self {
        Self { prices, titles }
    }

    /// Price source.
    pub fn prices(&self) -> &PriceLookup {
        &self.prices
    }

    /// Title source.
    pub fn titles(&self) -> &TitleFetcher {
        &self.titles
    }

    /// Run both lookups concurrently and merge their outcomes.
    ///
    /// Source failures are reported inside the returned view.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::Aggregation`] only when a lookup task
    /// dies before producing a result.
    #[tracing::instrument(name = "products.aggregate", skip(self), fields(product_id = %id), err)]
    pub async fn get_product_info(&self, id: ProductId) -> Result<ProductView, ProductsServiceError> {
        let prices = self.prices.clone();
        let titles = self.titles.clone();

        let price = tokio::spawn(async move { prices.fetch(id).await }.in_current_span());
        let title = tokio::spawn(async move { titles.fetch(id).await }.in_current_span());

        let (price, title) = tokio::join!(price, title);

        let price = price.map_err(|error| ProductsServiceError::Aggregation(error.to_string()))?;
        let title = title.map_err(|error| ProductsServiceError::Aggregation(error.to_string()))?;

        Ok(ProductView::merge(price, title))
    }
}
