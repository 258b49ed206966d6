//! Address Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{addresses::AddressResponse, extensions::*, state::State};

/// Address Index Handler
///
/// Returns every stored address.
#[endpoint(tags("addresses"), summary = "List Addresses")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<AddressResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let addresses = state
        .app
        .addresses
        .list_addresses()
        .await
        .or_500("failed to fetch addresses")?;

    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}
