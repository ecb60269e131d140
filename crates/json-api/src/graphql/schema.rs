//! GraphQL schema roots.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use tracing::{error, warn};

use myretail_app::{
    domain::{
        prices::{PriceLookupError, data::PriceUpdate},
        products::{ProductsService, ProductsServiceError},
    },
    ids::ProductId,
};

use super::types::{ProductPrice, ProductResponse, UpdateProductRequest, UpdateProductResponse};

pub(crate) type ProductSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the products service as shared context data.
pub(crate) fn build_schema(products: Arc<dyn ProductsService>) -> ProductSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(products)
        .finish()
}

pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Gets the product information
    async fn get_product_info(
        &self,
        #[graphql(desc = "The id of the product provided by the user for retrieval of information")]
        id: i32,
    ) -> ProductResponse {
        ProductResponse::new(ProductId::new(id))
    }
}

pub(crate) struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Enables the user to update a product's price
    async fn update_product_info(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The id of the product provided by the user for retrieval of information")]
        id: i32,
        #[graphql(desc = "Entity that contains the fields the user wants to update")]
        update_product_request: UpdateProductRequest,
    ) -> async_graphql::Result<UpdateProductResponse> {
        let products = ctx.data::<Arc<dyn ProductsService>>()?;
        let id = ProductId::new(id);

        let update = match PriceUpdate::try_from(update_product_request.new_price) {
            Ok(update) => update,
            Err(error) => {
                warn!(product_id = %id, "rejected price update: {error}");

                return Ok(UpdateProductResponse {
                    price: Some(ProductPrice::failed(format!("bad request: {error}"))),
                });
            }
        };

        let price = match products.update_price(id, update).await {
            Ok(record) => ProductPrice::from(record),
            Err(ProductsServiceError::NotFound) => {
                ProductPrice::failed(PriceLookupError::NotFound.to_string())
            }
            Err(error) => {
                error!(product_id = %id, "failed to update price: {error}");

                ProductPrice::failed(error.to_string())
            }
        };

        Ok(UpdateProductResponse { price: Some(price) })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use testresult::TestResult;

    use myretail_app::domain::{
        prices::records::PriceRecord,
        products::MockProductsService,
        titles::{ProductTitle, TitleProviderError, TitleUnavailable},
    };

    use super::*;

    async fn execute(products: MockProductsService, query: &str) -> TestResult<Value> {
        let response = build_schema(Arc::new(products)).execute(query).await;

        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );

        Ok(response.data.into_json()?)
    }

    fn stored_price(id: ProductId) -> PriceRecord {
        PriceRecord::new(id, Decimal::new(153, 1), "USD")
    }

    #[tokio::test]
    async fn price_only_query_never_fetches_title() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_price()
            .once()
            .with(eq(ProductId::new(8)))
            .returning(|id| Ok(stored_price(id)));

        products.expect_get_title().never();
        products.expect_get_product_info().never();
        products.expect_update_price().never();

        let data = execute(
            products,
            "{ getProductInfo(id: 8) { id price { currentPrice { value currencyCode } error } } }",
        )
        .await?;

        assert_eq!(
            data,
            json!({
                "getProductInfo": {
                    "id": 8,
                    "price": {
                        "currentPrice": { "value": 15.3, "currencyCode": "USD" },
                        "error": null
                    }
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn name_only_query_never_fetches_price() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_title().once().returning(|id| {
            Ok(ProductTitle {
                id: Some(id),
                title: "item1".to_string(),
            })
        });

        products.expect_get_price().never();
        products.expect_get_product_info().never();
        products.expect_update_price().never();

        let data = execute(products, "{ getProductInfo(id: 8) { name { name error } } }").await?;

        assert_eq!(
            data,
            json!({ "getProductInfo": { "name": { "name": "item1", "error": null } } })
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_sources_are_reported_per_field() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_price()
            .once()
            .returning(|_| Err(PriceLookupError::NotFound));

        products.expect_get_title().once().returning(|_| {
            Err(TitleUnavailable {
                attempts: 3,
                source: TitleProviderError::MissingTitle,
            })
        });

        products.expect_get_product_info().never();
        products.expect_update_price().never();

        let data = execute(
            products,
            "{ getProductInfo(id: 10) { price { currentPrice { value } error } name { name error } } }",
        )
        .await?;

        assert_eq!(
            data.pointer("/getProductInfo/price/error"),
            Some(&json!("price not found in data store"))
        );
        assert_eq!(
            data.pointer("/getProductInfo/price/currentPrice"),
            Some(&Value::Null)
        );
        assert_eq!(
            data.pointer("/getProductInfo/name/name"),
            Some(&Value::Null)
        );
        assert!(
            data.pointer("/getProductInfo/name/error")
                .and_then(Value::as_str)
                .is_some_and(|message| message.starts_with("could not retrieve title from redsky")),
            "unexpected name: {data}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_mutation_returns_merged_price() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_price()
            .once()
            .withf(|id, update| {
                *id == ProductId::new(1)
                    && *update
                        == PriceUpdate {
                            amount: None,
                            currency_code: Some("EUR".to_string()),
                        }
            })
            .returning(|id, _| Ok(PriceRecord::new(id, Decimal::new(11, 1), "EUR")));

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_get_product_info().never();

        let data = execute(
            products,
            r#"mutation {
                updateProductInfo(id: 1, updateProductRequest: { newPrice: { currencyCode: "EUR" } }) {
                    price { currentPrice { value currencyCode } error }
                }
            }"#,
        )
        .await?;

        assert_eq!(
            data,
            json!({
                "updateProductInfo": {
                    "price": {
                        "currentPrice": { "value": 1.1, "currencyCode": "EUR" },
                        "error": null
                    }
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_mutation_reports_missing_product() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_price()
            .once()
            .returning(|_, _| Err(ProductsServiceError::NotFound));

        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_get_product_info().never();

        let data = execute(
            products,
            "mutation { updateProductInfo(id: 99, updateProductRequest: { newPrice: { value: 2.5 } }) { price { currentPrice { value } error } } }",
        )
        .await?;

        assert_eq!(
            data,
            json!({
                "updateProductInfo": {
                    "price": { "currentPrice": null, "error": "price not found in data store" }
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_mutation_rejects_unknown_currency() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_price().never();
        products.expect_get_price().never();
        products.expect_get_title().never();
        products.expect_get_product_info().never();

        let data = execute(
            products,
            r#"mutation { updateProductInfo(id: 1, updateProductRequest: { newPrice: { currencyCode: "XYZ" } }) { price { error } } }"#,
        )
        .await?;

        assert!(
            data.pointer("/updateProductInfo/price/error")
                .and_then(Value::as_str)
                .is_some_and(|message| message.starts_with("bad request")),
            "unexpected data: {data}"
        );

        Ok(())
    }
}
