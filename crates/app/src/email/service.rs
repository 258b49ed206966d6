//! Email service.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use storefront::checkout::OrderConfirmation;
use tracing::{info, warn};

use crate::email::{EmailError, RenderedEmail};

/// SMTP connection and sender settings.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub from_address: String,
}

/// Sends order confirmations over SMTP.
#[derive(Clone)]
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    store_name: String,
}

impl SmtpEmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay settings are rejected.
    pub fn new(settings: &SmtpSettings, store_name: &str) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: settings.from_address.clone(),
            store_name: store_name.to_string(),
        })
    }

    fn message(&self, to: &str, email: RenderedEmail) -> Result<Message, EmailError> {
        let from: Mailbox = self
            .from_address
            .parse()
            .map_err(|_| EmailError::InvalidSender(self.from_address.clone()))?;

        let to: Mailbox = to
            .parse()
            .map_err(|_| EmailError::InvalidAddress(to.to_string()))?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html),
                    ),
            )?)
    }
}

impl std::fmt::Debug for SmtpEmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailService")
            .field("from_address", &self.from_address)
            .field("store_name", &self.store_name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_order_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<(), EmailError> {
        let email = RenderedEmail::order_confirmation(&self.store_name, &confirmation)?;
        let subject = email.subject.clone();
        let message = self.message(&confirmation.email, email)?;

        self.mailer.send(message).await?;

        info!(to = %confirmation.email, subject = %subject, "order confirmation sent");

        Ok(())
    }
}

/// Stand-in used when no SMTP relay is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEmailService;

#[async_trait]
impl EmailService for DisabledEmailService {
    async fn send_order_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<(), EmailError> {
        warn!(
            order_id = %confirmation.id,
            "not sending order confirmation: SMTP is not configured"
        );

        Err(EmailError::NotConfigured)
    }
}

#[automock]
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send the confirmation email for an order.
    async fn send_order_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<(), EmailError>;
}
