//! Addresses
//!
//! Delivery addresses submitted at checkout, together with their cart snapshot.

mod errors;
mod handlers;
mod models;

pub(crate) use handlers::*;
pub(crate) use models::{AddressResponse, CartItemBody};
