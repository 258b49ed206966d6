//! Email errors.

use lettre::transport::smtp::Error as SmtpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email delivery is not configured")]
    NotConfigured,

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("invalid sender address: {0}")]
    InvalidSender(String),

    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    #[error("failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}
