//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

mod store;
mod summary;

pub use store::{CART_STORAGE_KEY, CartStore, ListenerKey};
pub use summary::OrderSummary;

/// Cart line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product the line refers to
    #[serde(flatten)]
    pub product: Product,

    /// Number of units, never below one
    pub quantity: u32,
}

impl CartItem {
    /// A single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of line items, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary line items, merging duplicate products and
    /// raising zero quantities to one.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();

        for mut item in items {
            item.quantity = item.quantity.max(1);

            match cart.find_mut(item.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }

        cart
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line item for `product`, if present.
    pub fn get(&self, product: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product)
    }

    fn find_mut(&mut self, product: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product.id == product)
    }

    /// Add one unit of `product`, incrementing an existing line if there is one.
    pub fn add(&mut self, product: Product) {
        match self.find_mut(product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product)),
        }
    }

    /// Remove the line for `product`, returning it if it was present.
    pub fn remove(&mut self, product: ProductId) -> Option<CartItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product.id == product)?;

        Some(self.items.remove(position))
    }

    /// Set the quantity of `product`, clamped to a minimum of one.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn update_quantity(&mut self, product: ProductId, quantity: i64) -> bool {
        let Some(item) = self.find_mut(product) else {
            return false;
        };

        item.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

        true
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
