//! Postgres price store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    domain::prices::{errors::PriceStoreError, records::PriceRecord, store::PriceStore},
    ids::ProductId,
};

const GET_PRICE_SQL: &str = include_str!("sql/get_price.sql");
const UPSERT_PRICE_SQL: &str = include_str!("sql/upsert_price.sql");
const DELETE_PRICES_SQL: &str = include_str!("sql/delete_prices.sql");

/// [`PriceStore`] backed by the `prices` table.
#[derive(Debug, Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    /// Create a store backed by `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace every stored price with `records` in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is committed then.
    pub async fn replace_all(&self, records: &[PriceRecord]) -> Result<u64, PriceStoreError> {
        let mut tx = self.pool.begin().await?;

        query(DELETE_PRICES_SQL).execute(&mut *tx).await?;

        let mut written = 0;

        for record in records {
            query(UPSERT_PRICE_SQL)
                .bind(record.id.into_inner())
                .bind(record.amount)
                .bind(&record.currency_code)
                .execute(&mut *tx)
                .await?;

            written += 1;
        }

        tx.commit().await?;

        Ok(written)
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn get(&self, id: ProductId) -> Result<Option<PriceRecord>, PriceStoreError> {
        query_as::<Postgres, PriceRecord>(GET_PRICE_SQL)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(PriceStoreError::from)
    }

    async fn put(&self, record: PriceRecord) -> Result<PriceRecord, PriceStoreError> {
        query_as::<Postgres, PriceRecord>(UPSERT_PRICE_SQL)
            .bind(record.id.into_inner())
            .bind(record.amount)
            .bind(&record.currency_code)
            .fetch_one(&self.pool)
            .await
            .map_err(PriceStoreError::from)
    }
}

impl<'r> FromRow<'r, PgRow> for PriceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount: Decimal = row.try_get("amount")?;

        if amount < Decimal::ZERO {
            return Err(sqlx::Error::ColumnDecode {
                index: "amount".to_string(),
                source: format!("negative amount {amount}").into(),
            });
        }

        Ok(Self {
            id: ProductId::new(row.try_get("id")?),
            amount,
            currency_code: row.try_get("currency_code")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::prices::seed::sample_prices, test::TestDb};

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn put_then_get_round_trips_decimal_amount() -> TestResult {
        let db = TestDb::new().await;
        let store = PgPriceStore::new(db.pool().clone());

        store
            .put(PriceRecord::new(8, Decimal::new(153, 1), "USD"))
            .await?;

        let record = store.get(ProductId::new(8)).await?;

        assert_eq!(record, Some(PriceRecord::new(8, Decimal::new(153, 1), "USD")));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn get_unknown_id_returns_none() -> TestResult {
        let db = TestDb::new().await;
        let store = PgPriceStore::new(db.pool().clone());

        assert_eq!(store.get(ProductId::new(404)).await?, None);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn put_existing_id_overwrites_in_place() -> TestResult {
        let db = TestDb::new().await;
        let store = PgPriceStore::new(db.pool().clone());

        store
            .put(PriceRecord::new(1, Decimal::new(11, 1), "USD"))
            .await?;
        store
            .put(PriceRecord::new(1, Decimal::new(11, 1), "EUR"))
            .await?;

        let record = store.get(ProductId::new(1)).await?;

        assert_eq!(record.map(|r| r.currency_code), Some("EUR".to_string()));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn replace_all_discards_previous_rows() -> TestResult {
        let db = TestDb::new().await;
        let store = PgPriceStore::new(db.pool().clone());

        store
            .put(PriceRecord::new(999, Decimal::ONE, "USD"))
            .await?;

        let written = store.replace_all(&sample_prices()).await?;

        assert_eq!(written, 6);
        assert_eq!(store.get(ProductId::new(999)).await?, None);
        assert!(store.get(ProductId::new(13_860_428)).await?.is_some());

        Ok(())
    }
}
