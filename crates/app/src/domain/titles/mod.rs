//! Product titles from the RedSky catalog API.

pub mod client;
pub mod errors;
pub mod fetcher;
pub mod models;

pub use client::*;
pub use errors::*;
pub use fetcher::{RetryPolicy, TitleFetcher, TitleResult};
pub use models::ProductTitle;
