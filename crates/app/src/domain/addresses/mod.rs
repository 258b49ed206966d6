//! Addresses
//!
//! Delivery addresses submitted at checkout, stored together with the cart
//! snapshot that makes them an order.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::AddressesServiceError;
pub use service::*;
