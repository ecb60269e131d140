//! RedSky Models

use serde::Deserialize;

use crate::ids::ProductId;

/// Title resolved for a product, with the id the provider echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTitle {
    /// Id echoed by the provider, if it parsed.
    pub id: Option<ProductId>,
    /// Display title.
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedSkyResponse {
    product: RedSkyProduct,
}

#[derive(Debug, Deserialize)]
struct RedSkyProduct {
    item: RedSkyItem,
}

#[derive(Debug, Deserialize)]
struct RedSkyItem {
    #[serde(default)]
    tcin: Option<String>,

    #[serde(default)]
    product_description: Option<RedSkyProductDescription>,
}

#[derive(Debug, Deserialize)]
struct RedSkyProductDescription {
    #[serde(default)]
    title: Option<String>,
}

impl RedSkyResponse {
    /// Extract the title, or `None` when the payload carries no title.
    pub(crate) fn into_title(self) -> Option<ProductTitle> {
        let RedSkyItem {
            tcin,
            product_description,
        } = self.product.item;

        let title = product_description?.title?;

        Some(ProductTitle {
            id: tcin.and_then(|tcin| tcin.parse().ok()),
            title,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn extracts_title_and_echoed_id() -> TestResult {
        let response: RedSkyResponse = serde_json::from_value(json!({
            "product": {
                "item": {
                    "tcin": "13860428",
                    "product_description": { "title": "The Big Lebowski (Blu-ray)" },
                    "enrichment": { "buy_url": "ignored" }
                }
            }
        }))?;

        assert_eq!(
            response.into_title(),
            Some(ProductTitle {
                id: Some(ProductId::new(13_860_428)),
                title: "The Big Lebowski (Blu-ray)".to_string(),
            })
        );

        Ok(())
    }

    #[test]
    fn unparsable_tcin_is_dropped() -> TestResult {
        let response: RedSkyResponse = serde_json::from_value(json!({
            "product": {
                "item": {
                    "tcin": "A-123",
                    "product_description": { "title": "item1" }
                }
            }
        }))?;

        assert_eq!(response.into_title().and_then(|title| title.id), None);

        Ok(())
    }

    #[test]
    fn missing_description_has_no_title() -> TestResult {
        let response: RedSkyResponse =
            serde_json::from_value(json!({ "product": { "item": { "tcin": "8" } } }))?;

        assert_eq!(response.into_title(), None);

        Ok(())
    }

    #[test]
    fn missing_product_is_a_decode_error() {
        let result = serde_json::from_value::<RedSkyResponse>(json!({ "errors": [] }));

        assert!(result.is_err(), "expected decode failure");
    }
}
