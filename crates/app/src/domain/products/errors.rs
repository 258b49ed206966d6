//! Products service errors.

use thiserror::Error;

use crate::collection::CollectionError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Storage(#[from] CollectionError),
}
