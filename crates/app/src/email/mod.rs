//! Order confirmation email

pub mod errors;
pub mod service;
mod templates;

pub use errors::EmailError;
pub use service::*;
pub use templates::RenderedEmail;
