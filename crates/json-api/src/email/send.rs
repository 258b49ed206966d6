//! Send Order Confirmation Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::checkout::OrderConfirmation;

use crate::{
    addresses::CartItemBody, email::errors::into_status_error, extensions::*, state::State,
};

/// Send Email Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SendEmailRequest {
    /// Order identifier
    pub id: u64,

    /// Recipient, required
    pub email: Option<String>,

    pub full_name: String,
    pub cart_items: Vec<CartItemBody>,

    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,

    /// RFC 3339 timestamp, defaults to now
    pub order_date: Option<String>,
}

/// Send Email Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}

impl SendEmailRequest {
    fn into_confirmation(self, email: String) -> Result<OrderConfirmation, jiff::Error> {
        let order_date = match self.order_date.as_deref() {
            Some(date) => date.parse::<Timestamp>()?,
            None => Timestamp::now(),
        };

        Ok(OrderConfirmation {
            id: self.id.into(),
            email,
            full_name: self.full_name,
            cart_items: self.cart_items.into_iter().map(Into::into).collect(),
            total: self.total,
            street_address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.pincode,
            order_date,
        })
    }
}

/// Send Email Handler
///
/// Sends the order confirmation email to the customer.
#[endpoint(
    tags("email"),
    summary = "Send Order Confirmation",
    responses(
        (status_code = StatusCode::OK, description = "Email sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Email address is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to send email"),
    ),
)]
#[tracing::instrument(
    name = "email.send",
    skip(json, depot),
    fields(order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<SendEmailRequest>,
    depot: &mut Depot,
) -> Result<Json<SendEmailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let mut request = json.into_inner();

    tracing::Span::current().record("order_id", request.id);

    let Some(email) = request
        .email
        .take()
        .filter(|email| !email.trim().is_empty())
    else {
        return Err(StatusError::bad_request().brief("Email address is required"));
    };

    let confirmation = request
        .into_confirmation(email)
        .or_400("orderDate must be an RFC 3339 timestamp")?;

    state
        .app
        .email
        .send_order_confirmation(confirmation)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Order confirmation email sent successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::checkout::OrderId;
    use storefront_app::email::{EmailError, MockEmailService};

    use crate::test_helpers::email_service;

    use super::*;

    fn make_service(mailer: MockEmailService) -> Service {
        email_service(mailer, Router::with_path("send-email").post(handler))
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer
            .expect_send_order_confirmation()
            .once()
            .withf(|confirmation| {
                confirmation.id == OrderId::new(12)
                    && confirmation.email == "asha@example.com"
                    && confirmation.cart_items.len() == 1
                    && confirmation.postal_code == "411001"
            })
            .return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com/send-email")
            .json(&json!({
                "id": 12,
                "email": "asha@example.com",
                "fullName": "Asha Rao",
                "cartItems": [{ "id": 1, "name": "Neem Oil", "price": 10, "quantity": 2 }],
                "total": 20,
                "pincode": "411001",
                "orderDate": "2026-10-15T09:30:00Z"
            }))
            .send(&make_service(mailer))
            .await;

        let body: SendEmailResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success, "expected success flag");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_without_address_returns_400() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer.expect_send_order_confirmation().never();

        let res = TestClient::post("http://example.com/send-email")
            .json(&json!({ "id": 12, "fullName": "Asha Rao" }))
            .send(&make_service(mailer))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_blank_address_returns_400() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer.expect_send_order_confirmation().never();

        let res = TestClient::post("http://example.com/send-email")
            .json(&json!({ "id": 12, "email": "  " }))
            .send(&make_service(mailer))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_failure_returns_500() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer
            .expect_send_order_confirmation()
            .once()
            .return_once(|_| Err(EmailError::NotConfigured));

        let res = TestClient::post("http://example.com/send-email")
            .json(&json!({ "id": 12, "email": "asha@example.com" }))
            .send(&make_service(mailer))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_invalid_recipient_returns_400() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer
            .expect_send_order_confirmation()
            .once()
            .return_once(|_| Err(EmailError::InvalidAddress("asha".to_string())));

        let res = TestClient::post("http://example.com/send-email")
            .json(&json!({ "id": 12, "email": "asha" }))
            .send(&make_service(mailer))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_bad_sender_config_returns_500() -> TestResult {
        let mut mailer = MockEmailService::new();

        mailer
            .expect_send_order_confirmation()
            .once()
            .return_once(|_| Err(EmailError::InvalidSender("not a sender".to_string())));

        let res = TestClient::post("http://example.com/send-email")
            .json(&json!({ "id": 12, "email": "asha@example.com" }))
            .send(&make_service(mailer))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
