//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Image URL used when a product is saved without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Product identifier
pub type ProductId = TypedId<Product>;

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, immutable once assigned
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Image URL
    #[serde(default = "placeholder_image")]
    pub image: String,
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Product fields submitted from the management screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Product description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Image URL, the server substitutes a placeholder when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() -> TestResult {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "name": "Neem Oil",
            "price": 12.5,
        }))?;

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Decimal::new(125, 1));
        assert_eq!(product.description, "");
        assert_eq!(product.image, PLACEHOLDER_IMAGE);

        Ok(())
    }

    #[test]
    fn price_is_written_as_a_number() -> TestResult {
        let product = Product {
            id: ProductId::new(1),
            name: "Copper Fungicide".to_string(),
            price: Decimal::new(2000, 2),
            description: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
        };

        let value = serde_json::to_value(&product)?;

        assert!(value["price"].is_number(), "price should be a JSON number");

        Ok(())
    }
}
