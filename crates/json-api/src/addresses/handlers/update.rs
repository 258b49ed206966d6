//! Update Address Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::addresses::data::AddressUpdate;

use crate::{
    addresses::{AddressResponse, CartItemBody, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Update Address Request
///
/// Absent fields are left unchanged. `id` and `createdAt` in the body are ignored.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UpdateAddressRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub payment: Option<String>,
    pub cart_items: Option<Vec<CartItemBody>>,

    #[salvo(schema(value_type = Option<f64>))]
    pub total: Option<Decimal>,

    pub order_date: Option<String>,
}

impl UpdateAddressRequest {
    fn into_update(self) -> Result<AddressUpdate, jiff::Error> {
        let order_date = self
            .order_date
            .as_deref()
            .map(str::parse::<Timestamp>)
            .transpose()?;

        Ok(AddressUpdate {
            full_name: self.full_name,
            email: self.email,
            mobile: self.mobile,
            street_address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.pincode,
            payment_method: self.payment,
            cart_items: self
                .cart_items
                .map(|items| items.into_iter().map(Into::into).collect()),
            total: self.total,
            order_date,
        })
    }
}

/// Address Update Handler
#[endpoint(
    tags("addresses"),
    summary = "Update Address",
    responses(
        (status_code = StatusCode::OK, description = "Address updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "addresses.update",
    skip(address, json, depot),
    fields(address_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    address: PathParam<u64>,
    json: JsonBody<UpdateAddressRequest>,
    depot: &mut Depot,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let address = address.into_inner();

    tracing::Span::current().record("address_id", address);

    let update = json
        .into_inner()
        .into_update()
        .or_400("orderDate must be an RFC 3339 timestamp")?;

    let updated = state
        .app
        .addresses
        .update_address(address.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(address_id = address, "updated address");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::checkout::OrderId;
    use storefront_app::domain::addresses::{AddressesServiceError, MockAddressesService};

    use crate::test_helpers::{addresses_service, make_address};

    use super::*;

    fn make_service(repo: MockAddressesService) -> Service {
        addresses_service(repo, Router::with_path("addresses/{address}").put(handler))
    }

    #[tokio::test]
    async fn test_update_address_success() -> TestResult {
        let mut record = make_address(4);

        record.delivery.mobile = "9876543210".to_string();
        record.updated_at = Some(record.created_at);

        let mut repo = MockAddressesService::new();

        repo.expect_update_address()
            .once()
            .withf(|id, update| {
                *id == OrderId::new(4)
                    && *update
                        == AddressUpdate {
                            mobile: Some("9876543210".to_string()),
                            ..AddressUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(record));

        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_create_address().never();
        repo.expect_delete_address().never();

        let mut res = TestClient::put("http://example.com/addresses/4")
            .json(&json!({ "id": 10, "mobile": "9876543210" }))
            .send(&make_service(repo))
            .await;

        let body: AddressResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 4);
        assert_eq!(body.mobile, "9876543210");
        assert!(body.updated_at.is_some(), "updatedAt should be set");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_address_not_found_returns_404() -> TestResult {
        let mut repo = MockAddressesService::new();

        repo.expect_update_address()
            .once()
            .return_once(|_, _| Err(AddressesServiceError::NotFound));

        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_create_address().never();
        repo.expect_delete_address().never();

        let res = TestClient::put("http://example.com/addresses/4")
            .json(&json!({ "city": "Nashik" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
