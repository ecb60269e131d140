//! Price errors.

use thiserror::Error;

/// Failures raised by a [`PriceStore`](super::PriceStore) implementation.
#[derive(Debug, Error)]
pub enum PriceStoreError {
    /// Database failure.
    #[error("storage error: {0}")]
    Sql(#[source] sqlx::Error),

    /// A stored row could not be decoded.
    #[error("invalid stored price: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for PriceStoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::ColumnDecode { index, source } => {
                Self::InvalidData(format!("{index}: {source}"))
            }
            other => Self::Sql(other),
        }
    }
}

/// Why a price could not be resolved for a product.
#[derive(Debug, Error)]
pub enum PriceLookupError {
    /// No price is stored for the product.
    #[error("price not found in data store")]
    NotFound,

    /// The store failed while reading.
    #[error("{0}")]
    Store(#[from] PriceStoreError),
}

/// Rejections for a malformed price update payload.
#[derive(Debug, Error)]
pub enum InvalidPriceUpdate {
    /// Not an ISO-4217 currency code.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),

    /// Amounts below zero.
    #[error("price value must not be negative")]
    NegativeAmount,

    /// `NaN` or infinite amounts.
    #[error("price value must be a finite number")]
    NonFiniteAmount,

    /// The amount does not fit a `Decimal`.
    #[error("price value is out of range")]
    OutOfRange(#[from] rust_decimal::Error),
}

/// Errors from applying a price update.
#[derive(Debug, Error)]
pub enum UpdatePriceError {
    /// Nothing to update; no write happened.
    #[error("price not found in data store")]
    NotFound,

    /// The store failed while reading or writing.
    #[error("failed to persist price: {0}")]
    Store(#[from] PriceStoreError),
}
