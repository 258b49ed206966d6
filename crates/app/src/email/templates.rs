//! Email templates.

use askama::Template;
use rust_decimal::Decimal;
use storefront::checkout::OrderConfirmation;

use crate::email::EmailError;

struct Line {
    name: String,
    quantity: u32,
    line_total: String,
}

struct OrderEmail<'a> {
    store_name: &'a str,
    full_name: &'a str,
    order_id: u64,
    order_date: String,
    lines: Vec<Line>,
    total: String,
    street_address: &'a str,
    city: &'a str,
    state: &'a str,
    country: &'a str,
    postal_code: &'a str,
}

/// HTML template for the order confirmation email.
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationHtml<'a> {
    email: &'a OrderEmail<'a>,
}

/// Plain text template for the order confirmation email.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    email: &'a OrderEmail<'a>,
}

/// A rendered message, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl RenderedEmail {
    /// Render the confirmation for `confirmation`.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Template`] if a template fails to render.
    pub fn order_confirmation(
        store_name: &str,
        confirmation: &OrderConfirmation,
    ) -> Result<Self, EmailError> {
        let email = OrderEmail {
            store_name,
            full_name: &confirmation.full_name,
            order_id: confirmation.id.get(),
            order_date: confirmation
                .order_date
                .strftime("%B %-d, %Y %H:%M UTC")
                .to_string(),
            lines: confirmation
                .cart_items
                .iter()
                .map(|item| Line {
                    name: item.product.name.clone(),
                    quantity: item.quantity,
                    line_total: format_amount(item.line_total()),
                })
                .collect(),
            total: format_amount(confirmation.total),
            street_address: &confirmation.street_address,
            city: &confirmation.city,
            state: &confirmation.state,
            country: &confirmation.country,
            postal_code: &confirmation.postal_code,
        };

        Ok(Self {
            subject: format!(
                "Order Confirmation - {store_name} (Order #{})",
                confirmation.id
            ),
            text: OrderConfirmationText { email: &email }.render()?,
            html: OrderConfirmationHtml { email: &email }.render()?,
        })
    }
}

/// Two decimal places, rounded half away from zero.
fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn confirmation() -> Result<OrderConfirmation, serde_json::Error> {
        serde_json::from_value(json!({
            "id": 12,
            "email": "asha@example.com",
            "fullName": "Asha <Rao>",
            "cartItems": [
                { "id": 1, "name": "Neem Oil", "price": 12.5, "quantity": 2 },
                { "id": 2, "name": "Sprayer", "price": 3.333, "quantity": 3 }
            ],
            "total": 34.999,
            "address": "12 MG Road",
            "city": "Pune",
            "state": "Maharashtra",
            "country": "India",
            "pincode": "411001",
            "orderDate": "2026-10-15T09:30:00Z"
        }))
    }

    #[test]
    fn subject_names_store_and_order() -> TestResult {
        let email = RenderedEmail::order_confirmation("Pesticide Catalog", &confirmation()?)?;

        assert_eq!(
            email.subject,
            "Order Confirmation - Pesticide Catalog (Order #12)"
        );

        Ok(())
    }

    #[test]
    fn amounts_are_shown_with_two_decimals() -> TestResult {
        let email = RenderedEmail::order_confirmation("Pesticide Catalog", &confirmation()?)?;

        assert!(email.html.contains("$25.00"), "{}", email.html);
        assert!(email.html.contains("$10.00"), "{}", email.html);
        assert!(email.html.contains("$35.00"), "{}", email.html);
        assert!(email.text.contains("$35.00"), "{}", email.text);

        Ok(())
    }

    #[test]
    fn bodies_include_address_and_order_details() -> TestResult {
        let email = RenderedEmail::order_confirmation("Pesticide Catalog", &confirmation()?)?;

        for body in [&email.html, &email.text] {
            assert!(body.contains("12 MG Road"), "{body}");
            assert!(body.contains("411001"), "{body}");
            assert!(body.contains("#12"), "{body}");
            assert!(body.contains("October 15, 2026"), "{body}");
        }

        Ok(())
    }

    #[test]
    fn html_escapes_customer_input() -> TestResult {
        let email = RenderedEmail::order_confirmation("Pesticide Catalog", &confirmation()?)?;

        assert!(!email.html.contains("<Rao>"), "{}", email.html);
        assert!(email.text.contains("Asha <Rao>"), "{}", email.text);

        Ok(())
    }
}
