//! Price update coordination.

use std::sync::Arc;

use tracing::info;

use crate::{
    domain::prices::{
        data::PriceUpdate, errors::UpdatePriceError, records::PriceRecord, store::PriceStore,
    },
    ids::ProductId,
};

/// Applies partial price updates to existing records.
#[derive(Clone)]
pub struct UpdateCoordinator {
    store: Arc<dyn PriceStore>,
}

impl UpdateCoordinator {
    /// Create a coordinator writing through `store`.
    #[must_use]
    pub fn new(store: Arc<dyn PriceStore>) -> Self {
        Self { store }
    }

    /// Merge `update` over the stored price for `id` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`UpdatePriceError::NotFound`] without writing when no price is
    /// stored for `id`, or a store error if the read or write fails.
    #[tracing::instrument(
        name = "prices.update",
        skip(self, update),
        fields(product_id = %id),
        err
    )]
    pub async fn update_price(
        &self,
        id: ProductId,
        update: PriceUpdate,
    ) -> Result<PriceRecord, UpdatePriceError> {
        let existing = self
            .store
            .get(id)
            .await?
            .ok_or(UpdatePriceError::NotFound)?;

        let merged = update.apply(existing);
        let saved = self.store.put(merged).await?;

        info!(
            product_id = %saved.id,
            amount = %saved.amount,
            currency_code = %saved.currency_code,
            "updated price"
        );

        Ok(saved)
    }
}

impl std::fmt::Debug for UpdateCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateCoordinator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::prices::{errors::PriceStoreError, store::MockPriceStore};

    use super::*;

    #[tokio::test]
    async fn partial_update_keeps_unspecified_amount() -> TestResult {
        let mut store = MockPriceStore::new();

        store
            .expect_get()
            .once()
            .withf(|id| *id == ProductId::new(1))
            .return_once(|_| Ok(Some(PriceRecord::new(1, Decimal::new(11, 1), "USD"))));

        store
            .expect_put()
            .once()
            .withf(|record| *record == PriceRecord::new(1, Decimal::new(11, 1), "EUR"))
            .return_once(Ok);

        let saved = UpdateCoordinator::new(Arc::new(store))
            .update_price(
                ProductId::new(1),
                PriceUpdate {
                    amount: None,
                    currency_code: Some("EUR".to_string()),
                },
            )
            .await?;

        assert_eq!(saved, PriceRecord::new(1, Decimal::new(11, 1), "EUR"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_id_returns_not_found_without_writing() {
        let mut store = MockPriceStore::new();

        store.expect_get().once().return_once(|_| Ok(None));
        store.expect_put().never();

        let result = UpdateCoordinator::new(Arc::new(store))
            .update_price(ProductId::new(404), PriceUpdate::default())
            .await;

        assert!(
            matches!(result, Err(UpdatePriceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let mut store = MockPriceStore::new();

        store
            .expect_get()
            .once()
            .return_once(|_| Ok(Some(PriceRecord::new(1, Decimal::ONE, "USD"))));

        store
            .expect_put()
            .once()
            .return_once(|_| Err(PriceStoreError::InvalidData("disk full".to_string())));

        let result = UpdateCoordinator::new(Arc::new(store))
            .update_price(ProductId::new(1), PriceUpdate::default())
            .await;

        assert!(
            matches!(result, Err(UpdatePriceError::Store(_))),
            "expected Store error, got {result:?}"
        );
    }
}
