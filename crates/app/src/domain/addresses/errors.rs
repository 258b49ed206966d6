//! Addresses service errors.

use thiserror::Error;

use crate::collection::CollectionError;

#[derive(Debug, Error)]
pub enum AddressesServiceError {
    #[error("address not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[from] CollectionError),
}
