//! Email Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::email::EmailError;

pub(crate) fn into_status_error(error: EmailError) -> StatusError {
    match error {
        EmailError::InvalidAddress(address) => {
            StatusError::bad_request().brief(format!("Invalid email address: {address}"))
        }
        error => {
            error!("failed to send order confirmation: {error}");

            StatusError::internal_server_error().brief("Failed to send email")
        }
    }
}
