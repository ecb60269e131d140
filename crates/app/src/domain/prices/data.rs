//! Price Data

use rust_decimal::Decimal;
use rusty_money::iso;

use crate::domain::prices::{errors::InvalidPriceUpdate, records::PriceRecord};

/// Partial price update. Absent fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceUpdate {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New ISO-4217 code, upper case.
    pub currency_code: Option<String>,
}

impl PriceUpdate {
    /// Validate raw transport values into an update.
    ///
    /// # Errors
    ///
    /// Returns an error for negative or non-finite amounts and for currency
    /// codes that are not ISO-4217.
    pub fn parse(
        value: Option<f64>,
        currency_code: Option<&str>,
    ) -> Result<Self, InvalidPriceUpdate> {
        Ok(Self {
            amount: value.map(parse_amount).transpose()?,
            currency_code: currency_code.map(parse_currency_code).transpose()?,
        })
    }

    /// Merge this update over an existing record. The id never changes.
    #[must_use]
    pub fn apply(self, existing: PriceRecord) -> PriceRecord {
        PriceRecord {
            id: existing.id,
            amount: self.amount.unwrap_or(existing.amount),
            currency_code: self.currency_code.unwrap_or(existing.currency_code),
        }
    }

    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.currency_code.is_none()
    }
}

fn parse_amount(value: f64) -> Result<Decimal, InvalidPriceUpdate> {
    if !value.is_finite() {
        return Err(InvalidPriceUpdate::NonFiniteAmount);
    }

    let amount = Decimal::try_from(value)?;

    if amount < Decimal::ZERO {
        return Err(InvalidPriceUpdate::NegativeAmount);
    }

    Ok(amount.normalize())
}

fn parse_currency_code(code: &str) -> Result<String, InvalidPriceUpdate> {
    let code = code.trim().to_ascii_uppercase();

    if iso::find(&code).is_none() {
        return Err(InvalidPriceUpdate::UnknownCurrency(code));
    }

    Ok(code)
}
