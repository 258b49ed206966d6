//! Delivery form and its validation.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and covered by tests"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Delivery details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryForm {
    /// Recipient's full name
    pub full_name: String,

    /// Contact email, receives the confirmation
    pub email: String,

    /// Contact phone number
    pub mobile: String,

    /// House number and street
    #[serde(rename = "address")]
    pub street_address: String,

    /// City
    pub city: String,

    /// State or province
    pub state: String,

    /// Country
    pub country: String,

    /// Postal code
    #[serde(rename = "pincode")]
    pub postal_code: String,

    /// Payment method, e.g. `credit_card` or `cash_on_delivery`
    #[serde(rename = "payment")]
    pub payment_method: String,
}

/// Required delivery form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// [`DeliveryForm::full_name`]
    FullName,
    /// [`DeliveryForm::email`]
    Email,
    /// [`DeliveryForm::mobile`]
    Mobile,
    /// [`DeliveryForm::street_address`]
    StreetAddress,
    /// [`DeliveryForm::city`]
    City,
    /// [`DeliveryForm::state`]
    State,
    /// [`DeliveryForm::country`]
    Country,
    /// [`DeliveryForm::postal_code`]
    PostalCode,
    /// [`DeliveryForm::payment_method`]
    PaymentMethod,
}

impl FormField {
    /// Every required field, in form order.
    pub const ALL: [Self; 9] = [
        Self::FullName,
        Self::Email,
        Self::Mobile,
        Self::StreetAddress,
        Self::City,
        Self::State,
        Self::Country,
        Self::PostalCode,
        Self::PaymentMethod,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::Email => "email address",
            Self::Mobile => "mobile number",
            Self::StreetAddress => "street address",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::PostalCode => "postal code",
            Self::PaymentMethod => "payment method",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl DeliveryForm {
    /// Value of a required field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Mobile => &self.mobile,
            FormField::StreetAddress => &self.street_address,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::Country => &self.country,
            FormField::PostalCode => &self.postal_code,
            FormField::PaymentMethod => &self.payment_method,
        }
    }
}

/// Rejected delivery form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(FormField),

    /// The email is not shaped like `local@domain.tld`.
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Check that every required field is filled in and the email is well-formed.
///
/// # Errors
///
/// Returns the first empty field in form order, or
/// [`ValidationError::InvalidEmail`].
pub fn validate(form: &DeliveryForm) -> Result<(), ValidationError> {
    if let Some(field) = FormField::ALL
        .into_iter()
        .find(|field| form.field(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Whether `email` has a local part, an `@` and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn filled_form() -> DeliveryForm {
        DeliveryForm {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "+91 98765 43210".to_string(),
            street_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
            postal_code: "411001".to_string(),
            payment_method: "cash_on_delivery".to_string(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn every_field_is_required() {
        for field in FormField::ALL {
            let mut form = filled_form();

            match field {
                FormField::FullName => form.full_name.clear(),
                FormField::Email => form.email.clear(),
                FormField::Mobile => form.mobile.clear(),
                FormField::StreetAddress => form.street_address.clear(),
                FormField::City => form.city.clear(),
                FormField::State => form.state.clear(),
                FormField::Country => form.country.clear(),
                FormField::PostalCode => form.postal_code.clear(),
                FormField::PaymentMethod => form.payment_method.clear(),
            }

            assert_eq!(
                validate(&form),
                Err(ValidationError::MissingField(field)),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_form();

        form.city = "   ".to_string();

        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingField(FormField::City))
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();

        form.email = "not-an-email".to_string();

        assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn wire_names_match_the_checkout_payload() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(filled_form())?;

        assert_eq!(value["fullName"], "Asha Rao");
        assert_eq!(value["address"], "12 MG Road");
        assert_eq!(value["pincode"], "411001");
        assert_eq!(value["payment"], "cash_on_delivery");

        Ok(())
    }
}
