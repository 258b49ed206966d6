//! Storefront Domain Concerns

pub mod addresses;
pub mod products;
