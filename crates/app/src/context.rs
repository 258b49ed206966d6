//! App Context

use std::{path::PathBuf, sync::Arc};

use lettre::transport::smtp::Error as SmtpError;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    domain::{
        addresses::{AddressesService, JsonAddressesService},
        products::{JsonProductsService, ProductsService},
    },
    email::{DisabledEmailService, EmailService, SmtpEmailService, SmtpSettings},
};

/// File the product catalog is stored in, relative to the data directory.
pub const PRODUCTS_FILE: &str = "products.json";

/// File order addresses are stored in, relative to the data directory.
pub const ADDRESSES_FILE: &str = "addresses.json";

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to configure SMTP relay")]
    Smtp(#[source] SmtpError),
}

/// Settings needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub data_dir: PathBuf,
    pub store_name: String,
    pub smtp: Option<SmtpSettings>,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub email: Arc<dyn EmailService>,
}

impl AppContext {
    /// Build application context from settings.
    ///
    /// Collections live in `settings.data_dir`; the files are created on the
    /// first write. Without SMTP settings, confirmation emails are refused.
    ///
    /// # Errors
    ///
    /// Returns an error when the SMTP relay settings are rejected.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AppInitError> {
        let email: Arc<dyn EmailService> = match &settings.smtp {
            Some(smtp) => {
                info!(host = %smtp.host, port = smtp.port, "sending email through SMTP relay");

                Arc::new(
                    SmtpEmailService::new(smtp, &settings.store_name).map_err(AppInitError::Smtp)?,
                )
            }
            None => {
                warn!("SMTP is not configured, order confirmation emails will fail");

                Arc::new(DisabledEmailService)
            }
        };

        Ok(Self {
            products: Arc::new(JsonProductsService::new(
                settings.data_dir.join(PRODUCTS_FILE),
            )),
            addresses: Arc::new(JsonAddressesService::new(
                settings.data_dir.join(ADDRESSES_FILE),
            )),
            email,
        })
    }
}
