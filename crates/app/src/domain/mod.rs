//! Domain Concerns

pub mod prices;
pub mod products;
pub mod titles;
