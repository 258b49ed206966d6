//! Addresses Data

use jiff::Timestamp;
use rust_decimal::Decimal;
use storefront::{
    cart::CartItem,
    checkout::{NewOrder, OrderId, OrderRecord},
};

/// Build the stored record for a submitted order.
///
/// A missing order date defaults to the creation time.
pub fn new_record(id: OrderId, order: NewOrder, now: Timestamp) -> OrderRecord {
    OrderRecord {
        id,
        delivery: order.delivery,
        cart_items: order.cart_items,
        total: order.total,
        order_date: order.order_date.unwrap_or(now),
        created_at: now,
        updated_at: None,
    }
}

/// Address Update Data
///
/// Only the fields that are present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub payment_method: Option<String>,
    pub cart_items: Option<Vec<CartItem>>,
    pub total: Option<Decimal>,
    pub order_date: Option<Timestamp>,
}

impl AddressUpdate {
    /// Merge into `record`, stamping `updated_at`. The identifier and creation
    /// time are never changed.
    pub fn apply(self, mut record: OrderRecord, now: Timestamp) -> OrderRecord {
        let delivery = &mut record.delivery;

        replace(&mut delivery.full_name, self.full_name);
        replace(&mut delivery.email, self.email);
        replace(&mut delivery.mobile, self.mobile);
        replace(&mut delivery.street_address, self.street_address);
        replace(&mut delivery.city, self.city);
        replace(&mut delivery.state, self.state);
        replace(&mut delivery.country, self.country);
        replace(&mut delivery.postal_code, self.postal_code);
        replace(&mut delivery.payment_method, self.payment_method);
        replace(&mut record.cart_items, self.cart_items);
        replace(&mut record.total, self.total);
        replace(&mut record.order_date, self.order_date);

        record.updated_at = Some(now);

        record
    }
}

fn replace<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
