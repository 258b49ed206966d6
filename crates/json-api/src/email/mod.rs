//! Order confirmation email

mod errors;
pub(crate) mod send;
