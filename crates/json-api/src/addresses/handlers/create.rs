//! Create Address Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::checkout::{DeliveryForm, NewOrder};

use crate::{
    addresses::{AddressResponse, CartItemBody, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Create Address Request
///
/// Every field is optional; missing text fields are stored empty.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CreateAddressRequest {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub payment: String,
    pub cart_items: Vec<CartItemBody>,

    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// RFC 3339 timestamp, defaults to the time the address is stored
    pub order_date: Option<String>,
}

impl CreateAddressRequest {
    fn into_new_order(self) -> Result<NewOrder, jiff::Error> {
        let order_date = self
            .order_date
            .as_deref()
            .map(str::parse::<Timestamp>)
            .transpose()?;

        Ok(NewOrder {
            delivery: DeliveryForm {
                full_name: self.full_name,
                email: self.email,
                mobile: self.mobile,
                street_address: self.address,
                city: self.city,
                state: self.state,
                country: self.country,
                postal_code: self.pincode,
                payment_method: self.payment,
            },
            cart_items: self.cart_items.into_iter().map(Into::into).collect(),
            total: self.total,
            order_date,
        })
    }
}

/// Create Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Create Address",
    responses(
        (status_code = StatusCode::CREATED, description = "Address created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "addresses.create",
    skip(json, depot, res),
    fields(address_id = tracing::field::Empty, items = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAddressRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = json
        .into_inner()
        .into_new_order()
        .or_400("orderDate must be an RFC 3339 timestamp")?;

    let span = tracing::Span::current();

    span.record("items", order.cart_items.len());

    let created = state
        .app
        .addresses
        .create_address(order)
        .await
        .map_err(into_status_error)?;

    span.record("address_id", created.id.get());

    res.add_header(LOCATION, format!("/api/addresses/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::addresses::{AddressesServiceError, MockAddressesService};

    use crate::test_helpers::{addresses_service, make_address};

    use super::*;

    fn make_service(repo: MockAddressesService) -> Service {
        addresses_service(repo, Router::with_path("addresses").post(handler))
    }

    #[tokio::test]
    async fn test_create_address_success() -> TestResult {
        let mut repo = MockAddressesService::new();

        repo.expect_create_address()
            .once()
            .withf(|order| {
                order.delivery.full_name == "Asha Rao"
                    && order.delivery.postal_code == "411001"
                    && order.cart_items.len() == 1
                    && order.total == Decimal::new(20, 0)
                    && order.order_date.is_some()
            })
            .return_once(|_| Ok(make_address(1)));

        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_update_address().never();
        repo.expect_delete_address().never();

        let mut res = TestClient::post("http://example.com/addresses")
            .json(&json!({
                "fullName": "Asha Rao",
                "pincode": "411001",
                "cartItems": [{ "id": 1, "name": "Neem Oil", "price": 10, "quantity": 2 }],
                "total": 20,
                "orderDate": "2026-10-15T09:30:00.000Z"
            }))
            .send(&make_service(repo))
            .await;

        let body: AddressResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/addresses/1"));
        assert_eq!(body.id, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_address_accepts_an_empty_body() -> TestResult {
        let mut repo = MockAddressesService::new();

        repo.expect_create_address()
            .once()
            .withf(|order| *order == NewOrder::default())
            .return_once(|_| Ok(make_address(1)));

        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_update_address().never();
        repo.expect_delete_address().never();

        let res = TestClient::post("http://example.com/addresses")
            .json(&json!({}))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_address_bad_order_date_returns_400() -> TestResult {
        let mut repo = MockAddressesService::new();

        repo.expect_create_address().never();
        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_update_address().never();
        repo.expect_delete_address().never();

        let res = TestClient::post("http://example.com/addresses")
            .json(&json!({ "orderDate": "yesterday" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_address_storage_error_returns_500() -> TestResult {
        let mut repo = MockAddressesService::new();

        repo.expect_create_address().once().return_once(|_| {
            Err(AddressesServiceError::Storage(
                storefront_app::collection::CollectionError::Io {
                    path: "addresses.json".into(),
                    source: std::io::Error::other("disk full"),
                },
            ))
        });

        repo.expect_list_addresses().never();
        repo.expect_get_address().never();
        repo.expect_update_address().never();
        repo.expect_delete_address().never();

        let res = TestClient::post("http://example.com/addresses")
            .json(&json!({ "fullName": "Asha Rao" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
