//! Orders

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{Cart, CartItem},
    checkout::DeliveryForm,
    ids::TypedId,
};

/// Order identifier, assigned by the persistence service
pub type OrderId = TypedId<OrderRecord>;

/// Order payload submitted at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Delivery details
    #[serde(flatten)]
    pub delivery: DeliveryForm,

    /// Cart contents at submission time
    #[serde(default)]
    pub cart_items: Vec<CartItem>,

    /// Cart total at submission time
    #[serde(default)]
    pub total: Decimal,

    /// Submission time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<Timestamp>,
}

impl NewOrder {
    /// Snapshot `cart` together with the delivery details.
    pub fn from_cart(delivery: DeliveryForm, cart: &Cart, order_date: Timestamp) -> Self {
        Self {
            delivery,
            cart_items: cart.items().to_vec(),
            total: cart.total(),
            order_date: Some(order_date),
        }
    }
}

/// Persisted address/order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Record identifier
    pub id: OrderId,

    /// Delivery details
    #[serde(flatten)]
    pub delivery: DeliveryForm,

    /// Cart contents at submission time
    #[serde(default)]
    pub cart_items: Vec<CartItem>,

    /// Cart total at submission time
    #[serde(default)]
    pub total: Decimal,

    /// Submission time
    pub order_date: Timestamp,

    /// When the record was stored
    pub created_at: Timestamp,

    /// When the record was last edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for the order confirmation email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Order the confirmation is for
    pub id: OrderId,

    /// Recipient
    #[serde(default)]
    pub email: String,

    /// Recipient's name
    #[serde(default)]
    pub full_name: String,

    /// Ordered lines
    #[serde(default)]
    pub cart_items: Vec<CartItem>,

    /// Order total
    #[serde(default)]
    pub total: Decimal,

    /// Street address
    #[serde(default, rename = "address")]
    pub street_address: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// State or province
    #[serde(default)]
    pub state: String,

    /// Country
    #[serde(default)]
    pub country: String,

    /// Postal code
    #[serde(default, rename = "pincode")]
    pub postal_code: String,

    /// Submission time
    pub order_date: Timestamp,
}

impl OrderConfirmation {
    /// Confirmation for a stored `order`, addressed with `delivery`.
    pub fn new(order: &OrderRecord, delivery: &DeliveryForm) -> Self {
        Self {
            id: order.id,
            email: delivery.email.clone(),
            full_name: delivery.full_name.clone(),
            cart_items: order.cart_items.clone(),
            total: order.total,
            street_address: delivery.street_address.clone(),
            city: delivery.city.clone(),
            state: delivery.state.clone(),
            country: delivery.country.clone(),
            postal_code: delivery.postal_code.clone(),
            order_date: order.order_date,
        }
    }
}

impl From<&OrderRecord> for OrderConfirmation {
    fn from(order: &OrderRecord) -> Self {
        Self::new(order, &order.delivery)
    }
}
