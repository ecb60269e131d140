//! Price Records

use rust_decimal::Decimal;

use crate::ids::ProductId;

/// Price Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    /// Product the price belongs to.
    pub id: ProductId,
    /// Current amount.
    pub amount: Decimal,
    /// ISO-4217 currency code.
    pub currency_code: String,
}

impl PriceRecord {
    /// Create a price record
    pub fn new(id: impl Into<ProductId>, amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            currency_code: currency_code.into(),
        }
    }
}
