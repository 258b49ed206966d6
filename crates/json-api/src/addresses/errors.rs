//! Address Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::addresses::AddressesServiceError;

pub(crate) fn into_status_error(error: AddressesServiceError) -> StatusError {
    match error {
        AddressesServiceError::NotFound => StatusError::not_found().brief("Address not found"),
        AddressesServiceError::Storage(source) => {
            error!("address storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
