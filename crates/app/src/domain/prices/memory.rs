//! In-memory price store.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    domain::prices::{errors::PriceStoreError, records::PriceRecord, store::PriceStore},
    ids::ProductId,
};

/// Process-local [`PriceStore`] used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    records: RwLock<FxHashMap<ProductId, PriceRecord>>,
}

impl InMemoryPriceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`. Later duplicates win.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = PriceRecord>) -> Self {
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|record| (record.id, record))
                    .collect(),
            ),
        }
    }

    /// Number of stored prices.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn get(&self, id: ProductId) -> Result<Option<PriceRecord>, PriceStoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn put(&self, record: PriceRecord) -> Result<PriceRecord, PriceStoreError> {
        self.records.write().await.insert(record.id, record.clone());

        Ok(record)
    }
}
