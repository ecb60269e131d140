//! Prices

pub mod data;
pub mod errors;
pub mod lookup;
pub mod memory;
pub mod records;
mod repository;
pub mod seed;
pub mod store;
pub mod update;

pub use errors::*;
pub use lookup::{PriceLookup, PriceResult};
pub use memory::InMemoryPriceStore;
pub use repository::PgPriceStore;
pub use store::*;
pub use update::UpdateCoordinator;
