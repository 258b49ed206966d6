//! Address Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::{
    cart::CartItem,
    checkout::OrderRecord,
    products::{PLACEHOLDER_IMAGE, Product},
};

/// A cart line as sent and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemBody {
    /// Product identifier
    pub id: u64,

    pub name: String,

    /// Unit price
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    pub quantity: u32,
}

impl From<CartItem> for CartItemBody {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.product.id.get(),
            name: item.product.name,
            price: item.product.price,
            description: item.product.description,
            image: item.product.image,
            quantity: item.quantity,
        }
    }
}

impl From<CartItemBody> for CartItem {
    fn from(body: CartItemBody) -> Self {
        let image = if body.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            body.image
        };

        CartItem {
            product: Product {
                id: body.id.into(),
                name: body.name,
                price: body.price,
                description: body.description,
                image,
            },
            quantity: body.quantity.max(1),
        }
    }
}

/// Stored address as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressResponse {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub payment: String,
    pub cart_items: Vec<CartItemBody>,

    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// When the order was placed
    pub order_date: String,

    /// When the address was stored
    pub created_at: String,

    /// When the address was last edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<OrderRecord> for AddressResponse {
    fn from(record: OrderRecord) -> Self {
        let delivery = record.delivery;

        AddressResponse {
            id: record.id.get(),
            full_name: delivery.full_name,
            email: delivery.email,
            mobile: delivery.mobile,
            address: delivery.street_address,
            city: delivery.city,
            state: delivery.state,
            country: delivery.country,
            pincode: delivery.postal_code,
            payment: delivery.payment_method,
            cart_items: record.cart_items.into_iter().map(Into::into).collect(),
            total: record.total,
            order_date: record.order_date.to_string(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.as_ref().map(ToString::to_string),
        }
    }
}
