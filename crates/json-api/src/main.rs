//! Storefront JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use storefront_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod addresses;
mod config;
mod email;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

const ENDPOINTS: [&str; 12] = [
    "GET    /api/products          - List products",
    "GET    /api/products/{id}     - Get product",
    "POST   /api/products          - Create product",
    "PUT    /api/products/{id}     - Update product",
    "DELETE /api/products/{id}     - Delete product",
    "GET    /api/addresses         - List addresses",
    "GET    /api/addresses/{id}    - Get address",
    "POST   /api/addresses         - Create address",
    "PUT    /api/addresses/{id}    - Update address",
    "DELETE /api/addresses/{id}    - Delete address",
    "POST   /api/send-email        - Send order confirmation email",
    "GET    /health                - Health check",
];

/// Storefront JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    let app = match AppContext::from_settings(&config.app_settings()) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // Bind server
    let listener = TcpListener::new(addr.clone()).bind().await;

    let service = router::service(State::from_app_context(app, config.server.port));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    info!(data_dir = %config.storage.data_dir.display(), "server running on {addr}");

    for endpoint in ENDPOINTS {
        info!("  {endpoint}");
    }

    // Start serving requests
    server.serve(service).await;
}
