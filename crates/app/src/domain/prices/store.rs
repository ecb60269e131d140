//! Price store abstraction.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::prices::{errors::PriceStoreError, records::PriceRecord},
    ids::ProductId,
};

/// Keyed store of the current price for each product.
///
/// Implementations must tolerate concurrent reads and keyed writes; atomicity
/// of concurrent writes to the same id is the store's responsibility.
#[automock]
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Fetch the stored price for `id`, if any.
    async fn get(&self, id: ProductId) -> Result<Option<PriceRecord>, PriceStoreError>;

    /// Insert or replace the price keyed by `record.id`.
    async fn put(&self, record: PriceRecord) -> Result<PriceRecord, PriceStoreError>;
}
