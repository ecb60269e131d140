//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Helpers for pulling shared server state out of the depot.
pub(crate) trait DepotExt {
    /// Injected [`State`], or a logged 500 when the router was wired without it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("server state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
