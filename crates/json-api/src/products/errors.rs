//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Name and price are required")
        }
        ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Price must not be negative")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Storage(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
