//! Server configuration module

use clap::Parser;
use storefront_app::context::AppSettings;

use crate::config::{
    email::EmailConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    storage::StorageConfig,
};

pub(crate) mod email;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storage;

pub(crate) use logging::LogFormat;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Collection storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Confirmation email settings.
    #[command(flatten)]
    pub email: EmailConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for building the application context.
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            data_dir: self.storage.data_dir.clone(),
            store_name: self.email.store_name.clone(),
            smtp: self.email.smtp_settings(),
        }
    }
}
