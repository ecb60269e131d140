//! Products service errors.

use thiserror::Error;

use crate::domain::prices::{PriceStoreError, UpdatePriceError};

/// Products Service Errors
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// The product has no stored price.
    #[error("product not found")]
    NotFound,

    /// Price store failure.
    #[error("storage error")]
    Store(#[source] PriceStoreError),

    /// A concurrent lookup branch failed before producing a result.
    #[error("aggregation failed: {0}")]
    Aggregation(String),
}

impl From<UpdatePriceError> for ProductsServiceError {
    fn from(error: UpdatePriceError) -> Self {
        match error {
            UpdatePriceError::NotFound => Self::NotFound,
            UpdatePriceError::Store(source) => Self::Store(source),
        }
    }
}
