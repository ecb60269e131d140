//! Price lookup.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    domain::prices::{errors::PriceLookupError, records::PriceRecord, store::PriceStore},
    ids::ProductId,
};

/// Outcome of resolving a product's price.
pub type PriceResult = Result<PriceRecord, PriceLookupError>;

/// Wraps the price store, turning present/absent records into a [`PriceResult`].
///
/// Store calls are not retried.
#[derive(Clone)]
pub struct PriceLookup {
    store: Arc<dyn PriceStore>,
}

impl PriceLookup {
    /// Create a lookup over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn PriceStore>) -> Self {
        Self { store }
    }

    /// Resolve the price for `id`. Never fails outright; store errors become
    /// [`PriceLookupError::Store`].
    pub async fn fetch(&self, id: ProductId) -> PriceResult {
        match self.store.get(id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => {
                debug!(product_id = %id, "no stored price");

                Err(PriceLookupError::NotFound)
            }
            Err(source) => {
                warn!(product_id = %id, "price store lookup failed: {source}");

                Err(PriceLookupError::Store(source))
            }
        }
    }
}

impl std::fmt::Debug for PriceLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceLookup").finish_non_exhaustive()
    }
}
