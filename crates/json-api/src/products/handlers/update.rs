//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use myretail_app::{domain::prices::data::PriceUpdate, ids::ProductId};

use crate::{extensions::*, products::errors::into_status_error};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub current_price: UpdatePriceRequest,
}

/// New price fields. Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePriceRequest {
    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product Price",
    responses(
        (status_code = StatusCode::OK, description = "Price updated"),
        (status_code = StatusCode::NOT_FOUND, description = "No price stored for product"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::new(id.into_inner());
    let UpdatePriceRequest {
        value,
        currency_code,
    } = json.into_inner().current_price;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let update = PriceUpdate::parse(value, currency_code.as_deref()).or_400()?;

    let saved = state
        .app
        .products
        .update_price(id, update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        product_id = %id,
        amount = %saved.amount,
        currency_code = %saved.currency_code,
        "updated product price"
    );

    Ok(StatusCode::OK)
}
