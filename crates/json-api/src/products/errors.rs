//! Product Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use myretail_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("product not found"),
        ProductsServiceError::Aggregation(reason) => {
            warn!("product aggregation failed: {reason}");

            StatusError::bad_request().brief("bad request")
        }
        ProductsServiceError::Store(source) => {
            error!("price store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
