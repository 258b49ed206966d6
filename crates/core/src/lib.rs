//! Storefront
//!
//! Client-side core of the storefront: the shopping cart, the checkout flow and
//! an HTTP client for the storefront JSON API.

pub mod api;
pub mod cart;
pub mod checkout;
pub mod ids;
pub mod prelude;
pub mod products;
pub mod storage;
