//! Order summary shown next to the checkout form.

use rust_decimal::Decimal;

use crate::cart::Cart;

/// Flat rate applied to the subtotal for display.
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Subtotal, shipping, tax and grand total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line totals
    pub subtotal: Decimal,

    /// Shipping charge, currently always free
    pub shipping: Decimal,

    /// Tax on the subtotal
    pub tax: Decimal,

    /// Subtotal plus shipping and tax
    pub grand_total: Decimal,
}

impl OrderSummary {
    /// Summarise `cart`.
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let shipping = Decimal::ZERO;
        let tax = subtotal * TAX_RATE;

        Self {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }

    /// Whether shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
