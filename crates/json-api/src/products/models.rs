//! Product Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::products::Product;

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Catalog identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Product description
    pub description: String,

    /// Image URL
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.get(),
            name: product.name,
            price: product.price,
            description: product.description,
            image: product.image,
        }
    }
}
