//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::warn;

/// Map client input errors to a logged 400.
pub(crate) trait ResultExt<T> {
    /// The error text becomes the response brief.
    fn or_400(self) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("rejected request: {error}");

            StatusError::bad_request().brief(format!("bad request: {error}"))
        })
    }
}
