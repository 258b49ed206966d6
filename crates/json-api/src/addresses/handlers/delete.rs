//! Delete Address Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    addresses::{AddressResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Address Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressDeletedResponse {
    pub message: String,

    /// The removed address
    pub address: AddressResponse,
}

/// Delete Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Delete Address",
    responses(
        (status_code = StatusCode::OK, description = "Address deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "addresses.delete", skip(address, depot), err)]
pub(crate) async fn handler(
    address: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<AddressDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state
        .app
        .addresses
        .delete_address(address.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(AddressDeletedResponse {
        message: "Address deleted".to_string(),
        address: deleted.into(),
    }))
}
