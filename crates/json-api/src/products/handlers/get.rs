//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use myretail_app::{
    domain::products::models::{CurrentPrice, ErrorEntry, ProductView},
    ids::ProductId,
};

use crate::{extensions::*, products::errors::into_status_error};

/// Merged product details. Sources that failed are reported in `productErrors`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Product title from RedSky
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stored price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<CurrentPriceResponse>,

    /// Failed sources, price first
    #[serde(rename = "productErrors")]
    pub product_errors: Vec<ProductErrorResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CurrentPriceResponse {
    pub value: f64,
    pub currency_code: String,
}

/// Exactly one of the two fields is set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductErrorResponse {
    #[serde(
        rename = "productPriceError",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_price_error: Option<String>,

    #[serde(rename = "redSkyError", default, skip_serializing_if = "Option::is_none")]
    pub red_sky_error: Option<String>,
}

impl From<&CurrentPrice> for CurrentPriceResponse {
    fn from(price: &CurrentPrice) -> Self {
        Self {
            value: price.value(),
            currency_code: price.currency_code.clone(),
        }
    }
}

impl From<ErrorEntry> for ProductErrorResponse {
    fn from(entry: ErrorEntry) -> Self {
        match entry {
            ErrorEntry::PriceError(message) => Self {
                product_price_error: Some(message),
                red_sky_error: None,
            },
            ErrorEntry::TitleError(message) => Self {
                product_price_error: None,
                red_sky_error: Some(message),
            },
        }
    }
}

impl From<ProductView> for ProductResponse {
    fn from(view: ProductView) -> Self {
        Self {
            id: view.id.map(ProductId::into_inner),
            name: view.name,
            current_price: view.current_price.as_ref().map(CurrentPriceResponse::from),
            product_errors: view.errors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Product Handler
///
/// Returns the stored price merged with the RedSky title. Responds 404 only
/// when both lookups failed.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product resolved, possibly partially"),
        (status_code = StatusCode::NOT_FOUND, description = "Neither price nor title could be resolved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "products.get",
    skip(id, depot, res),
    fields(product_id = tracing::field::Empty, errors = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::new(id.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(id));

    let view = state
        .app
        .products
        .get_product_info(id)
        .await
        .map_err(into_status_error)?;

    span.record("errors", view.errors.len());

    if !view.status().is_success() {
        res.status_code(StatusCode::NOT_FOUND);
    }

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use myretail_app::domain::{
        prices::PriceLookupError,
        products::{MockProductsService, ProductsServiceError},
    };

    use crate::test_helpers::products_service;

    use super::{super::tests::*, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("product/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_merged_product() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product_info()
            .once()
            .withf(|id| *id == ProductId::new(8))
            .return_once(|_| Ok(full_view(8)));

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let mut res = TestClient::get("http://example.com/product/8")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "id": 8,
                "name": "item1",
                "current_price": { "value": 15.3, "currency_code": "USD" },
                "productErrors": []
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_price_is_still_200() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product_info().once().return_once(|_| {
            Ok(ProductView::merge(Err(PriceLookupError::NotFound), Ok(title(9))))
        });

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let mut res = TestClient::get("http://example.com/product/9")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "id": 9,
                "name": "item1",
                "productErrors": [{ "productPriceError": "price not found in data store" }]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_title_reports_redsky_error() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product_info()
            .once()
            .return_once(|_| Ok(ProductView::merge(Ok(price_record(8)), Err(title_unavailable()))));

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let mut res = TestClient::get("http://example.com/product/8")
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, Some(8));
        assert_eq!(body.name, None);
        assert!(body.current_price.is_some(), "expected a price");
        assert_eq!(body.product_errors.len(), 1);
        assert!(
            body.product_errors.first().is_some_and(|error| error
                .red_sky_error
                .as_deref()
                .is_some_and(|message| message.starts_with("could not retrieve title from redsky"))),
            "unexpected errors: {:?}",
            body.product_errors
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_both_sources_failing_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product_info().once().return_once(|_| {
            Ok(ProductView::merge(
                Err(PriceLookupError::NotFound),
                Err(title_unavailable()),
            ))
        });

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let mut res = TestClient::get("http://example.com/product/10")
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.id, None);
        assert_eq!(body.name, None);
        assert!(body.current_price.is_none(), "expected no price");
        assert_eq!(body.product_errors.len(), 2);
        assert!(
            body.product_errors
                .first()
                .is_some_and(|error| error.product_price_error.is_some()),
            "price error must come first"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_aggregation_failure_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product_info()
            .once()
            .return_once(|_| Err(ProductsServiceError::Aggregation("task panicked".to_string())));

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let res = TestClient::get("http://example.com/product/8")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product_info().never();
        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_update_price().never();

        let res = TestClient::get("http://example.com/product/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
