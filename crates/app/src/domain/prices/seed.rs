//! Sample price data loaded into fresh stores.

use rust_decimal::Decimal;

use crate::domain::prices::records::PriceRecord;

/// Prices seeded into an empty store on start-up.
#[must_use]
pub fn sample_prices() -> Vec<PriceRecord> {
    vec![
        PriceRecord::new(123, Decimal::new(1423, 2), "USD"),
        PriceRecord::new(234, Decimal::new(7424, 2), "USD"),
        PriceRecord::new(345, Decimal::new(59353, 2), "EUR"),
        PriceRecord::new(456, Decimal::new(5355, 2), "USD"),
        PriceRecord::new(13_860_428, Decimal::new(119_333, 2), "USD"),
        PriceRecord::new(567, Decimal::new(9333, 2), "EUR"),
    ]
}
