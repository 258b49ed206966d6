//! Email Config

use clap::Args;
use secrecy::SecretString;
use storefront_app::email::SmtpSettings;

/// Confirmation email settings.
///
/// Email is disabled unless an SMTP host is given.
#[derive(Debug, Args)]
pub struct EmailConfig {
    /// Store name shown in confirmation emails
    #[arg(long, env = "STORE_NAME", default_value = "Pesticide Catalog")]
    pub store_name: String,

    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    /// SMTP username
    #[arg(long, env = "SMTP_USERNAME", default_value = "")]
    pub smtp_username: String,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true, default_value = "")]
    pub smtp_password: String,

    /// Sender address, defaults to the SMTP username
    #[arg(long, env = "EMAIL_FROM")]
    pub email_from: Option<String>,
}

impl EmailConfig {
    /// SMTP settings, or `None` when no relay host is configured.
    pub fn smtp_settings(&self) -> Option<SmtpSettings> {
        let host = self.smtp_host.clone().filter(|host| !host.is_empty())?;

        Some(SmtpSettings {
            host,
            port: self.smtp_port,
            username: self.smtp_username.clone(),
            password: SecretString::from(self.smtp_password.clone()),
            from_address: self
                .email_from
                .clone()
                .unwrap_or_else(|| self.smtp_username.clone()),
        })
    }
}
