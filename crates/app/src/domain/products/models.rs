//! Product Models

use rust_decimal::{Decimal, prelude::ToPrimitive};
use smallvec::SmallVec;

use crate::{
    domain::{prices::PriceResult, prices::records::PriceRecord, titles::TitleResult},
    ids::ProductId,
};

/// Current price of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPrice {
    /// Amount
    pub amount: Decimal,
    /// Currency code
    pub currency_code: String,
}

impl CurrentPrice {
    /// Amount as a float for JSON and GraphQL output.
    pub fn value(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }
}

impl From<PriceRecord> for CurrentPrice {
    fn from(record: PriceRecord) -> Self {
        Self {
            amount: record.amount,
            currency_code: record.currency_code,
        }
    }
}

/// A failed source, tagged with the subsystem that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// The price lookup failed.
    PriceError(String),
    /// The title could not be retrieved.
    TitleError(String),
}

impl ErrorEntry {
    /// Human readable failure message.
    pub fn message(&self) -> &str {
        match self {
            Self::PriceError(message) | Self::TitleError(message) => message,
        }
    }
}

/// How completely a [`ProductView`] was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    /// Both sources succeeded.
    Resolved,

    /// Exactly one source failed. Still a success.
    PartiallyResolved,

    /// Both sources failed.
    Unresolved,
}

impl ProductStatus {
    /// Anything but [`ProductStatus::Unresolved`].
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Merged price and title for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    /// Product id, when either source knows it.
    pub id: Option<ProductId>,
    /// Title from the provider.
    pub name: Option<String>,
    /// Stored price.
    pub current_price: Option<CurrentPrice>,

    /// Price error first, then title error.
    pub errors: SmallVec<[ErrorEntry; 2]>,
}

impl ProductView {
    /// Merge both source outcomes. The id prefers the stored price record and
    /// falls back to the id echoed by the title provider.
    #[must_use]
    pub fn merge(price: PriceResult, title: TitleResult) -> Self {
        let mut errors = SmallVec::new();

        let (price_id, current_price) = match price {
            Ok(record) => (Some(record.id), Some(CurrentPrice::from(record))),
            Err(error) => {
                errors.push(ErrorEntry::PriceError(error.to_string()));
                (None, None)
            }
        };

        let (title_id, name) = match title {
            Ok(title) => (title.id, Some(title.title)),
            Err(error) => {
                errors.push(ErrorEntry::TitleError(error.to_string()));
                (None, None)
            }
        };

        Self {
            id: price_id.or(title_id),
            name,
            current_price,
            errors,
        }
    }

    /// Resolution status derived from the recorded errors.
    pub fn status(&self) -> ProductStatus {
        match self.errors.len() {
            0 => ProductStatus::Resolved,
            1 => ProductStatus::PartiallyResolved,
            _ => ProductStatus::Unresolved,
        }
    }
}
