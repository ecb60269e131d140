//! Products

pub mod aggregator;
pub mod errors;
pub mod models;
pub mod service;

pub use aggregator::Aggregator;
pub use errors::ProductsServiceError;
pub use service::*;
