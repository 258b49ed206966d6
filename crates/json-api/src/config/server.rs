//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Address to listen on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on, the storefront client expects 3001
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3001)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
