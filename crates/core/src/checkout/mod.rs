//! Checkout

mod coordinator;
mod form;
mod order;

pub use coordinator::*;
pub use form::*;
pub use order::*;
