//! GraphQL object and input types.

use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, SimpleObject};

use myretail_app::{
    domain::{
        prices::{InvalidPriceUpdate, PriceResult, data::PriceUpdate, records::PriceRecord},
        products::{ProductsService, models::CurrentPrice},
        titles::TitleResult,
    },
    ids::ProductId,
};

/// Entity that gives a product's name and price retrieved
pub(crate) struct ProductResponse {
    id: ProductId,
}

impl ProductResponse {
    pub(crate) fn new(id: ProductId) -> Self {
        Self { id }
    }
}

/// Price and title are resolved independently; only selected fields hit
/// their source.
#[Object]
impl ProductResponse {
    /// The id of the product to be retrieved
    async fn id(&self) -> i32 {
        self.id.into_inner()
    }

    /// Gets the name of the product along with errors if any
    async fn name(&self, ctx: &Context<'_>) -> async_graphql::Result<ProductName> {
        let products = ctx.data::<Arc<dyn ProductsService>>()?;

        Ok(products.get_title(self.id).await.into())
    }

    /// Gets the price of the product
    async fn price(&self, ctx: &Context<'_>) -> async_graphql::Result<ProductPrice> {
        let products = ctx.data::<Arc<dyn ProductsService>>()?;

        Ok(products.get_price(self.id).await.into())
    }
}

/// Entity that gives a product's name along with any errors on an attempt of its retrieval
#[derive(Debug, SimpleObject)]
pub(crate) struct ProductName {
    /// Name of the product
    pub name: Option<String>,

    /// Error message if there was an error in retrieving the name
    pub error: Option<String>,
}

impl From<TitleResult> for ProductName {
    fn from(result: TitleResult) -> Self {
        match result {
            Ok(title) => Self {
                name: Some(title.title),
                error: None,
            },
            Err(error) => Self {
                name: None,
                error: Some(error.to_string()),
            },
        }
    }
}

/// Entity that gives the product's price along with any errors during its retrieval
#[derive(Debug, SimpleObject)]
pub(crate) struct ProductPrice {
    /// Gets the product's current value and currency code
    pub current_price: Option<ProductCurrentPrice>,

    /// Error message if there was an error in retrieving the price
    pub error: Option<String>,
}

impl ProductPrice {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            current_price: None,
            error: Some(message.into()),
        }
    }
}

impl From<PriceRecord> for ProductPrice {
    fn from(record: PriceRecord) -> Self {
        Self {
            current_price: Some(CurrentPrice::from(record).into()),
            error: None,
        }
    }
}

impl From<PriceResult> for ProductPrice {
    fn from(result: PriceResult) -> Self {
        match result {
            Ok(record) => record.into(),
            Err(error) => Self::failed(error.to_string()),
        }
    }
}

/// Entity that gives the product's current value and currency code
#[derive(Debug, SimpleObject)]
pub(crate) struct ProductCurrentPrice {
    /// Product's value
    pub value: Option<f64>,

    /// Product's currency code
    pub currency_code: Option<String>,
}

impl From<CurrentPrice> for ProductCurrentPrice {
    fn from(price: CurrentPrice) -> Self {
        Self {
            value: Some(price.value()),
            currency_code: Some(price.currency_code),
        }
    }
}

/// Entity that allows the user to specify the values they want to modify for a product
#[derive(Debug, InputObject)]
pub(crate) struct UpdateProductRequest {
    /// Values to be provided by the user for updating price details of the product
    pub new_price: ProductNewPrice,
}

/// New value and currency code for a product that needs to be updated
#[derive(Debug, InputObject)]
pub(crate) struct ProductNewPrice {
    /// New value of the product
    pub value: Option<f64>,

    /// New currency code of the product
    pub currency_code: Option<String>,
}

impl TryFrom<ProductNewPrice> for PriceUpdate {
    type Error = InvalidPriceUpdate;

    fn try_from(price: ProductNewPrice) -> Result<Self, Self::Error> {
        PriceUpdate::parse(price.value, price.currency_code.as_deref())
    }
}

/// Entity that displays the updated product's price response details
#[derive(Debug, SimpleObject)]
pub(crate) struct UpdateProductResponse {
    /// Displays the product's current price details and errors if any on its retrieval
    pub price: Option<ProductPrice>,
}
