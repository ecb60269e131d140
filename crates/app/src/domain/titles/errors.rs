//! Title errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call to the title provider.
#[derive(Debug, Error)]
pub enum TitleProviderError {
    /// Transport, timeout, or body decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status. The body is not kept.
    #[error("redsky returned {status}")]
    UnexpectedStatus {
        /// Status returned by the provider.
        status: StatusCode,
    },

    /// A 2xx payload without `product.item.product_description.title`.
    #[error("title missing from redsky response")]
    MissingTitle,
}

/// The title could not be retrieved within the attempt budget.
#[derive(Debug, Error)]
#[error(
    "could not retrieve title from redsky: (retries exhausted: {attempts}/{attempts}, last error: {source})"
)]
pub struct TitleUnavailable {
    /// Attempts made.
    pub attempts: u32,
    /// Failure of the final attempt.
    #[source]
    pub source: TitleProviderError,
}
