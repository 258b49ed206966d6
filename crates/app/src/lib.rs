//! Storefront application domain and persistence modules.

pub mod collection;
pub mod context;
pub mod domain;
pub mod email;

#[cfg(test)]
mod test;
