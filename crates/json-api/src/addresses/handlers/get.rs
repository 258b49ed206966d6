//! Get Address Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    addresses::{AddressResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Get Address Handler
///
/// Returns an address with its cart snapshot.
#[endpoint(
    tags("addresses"),
    summary = "Get Address",
    responses(
        (status_code = StatusCode::OK, description = "Address found"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    address: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let address = state
        .app
        .addresses
        .get_address(address.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(address.into()))
}
