//! Checkout Example
//!
//! Fills a cart from the running API's catalog and places an order.
//!
//! Use `-u` to point at a different API base URL
//! Use `-n` to limit the number of products added to the cart

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

/// Checkout example arguments
#[derive(Debug, Parser)]
struct ExampleCheckoutArgs {
    /// API base URL
    #[arg(short = 'u', long, default_value = "http://localhost:3001")]
    base_url: String,

    /// Number of catalog products to add
    #[arg(short = 'n', long, default_value_t = 2)]
    n: usize,

    /// Confirmation recipient
    #[arg(short, long, default_value = "customer@example.com")]
    email: String,
}

/// Checkout Example
#[tokio::main]
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .compact()
        .init();

    let args = ExampleCheckoutArgs::parse();

    let client = Arc::new(StorefrontClient::new(ApiConfig {
        base_url: args.base_url,
        ..ApiConfig::default()
    })?);

    let mut store = CartStore::load(MemoryStorage::new());

    for product in client.list_products().await?.into_iter().take(args.n) {
        store.add_to_cart(product);
    }

    let summary = OrderSummary::from_cart(store.cart());

    println!("Subtotal:    {:>10.2}", summary.subtotal);
    println!("Tax:         {:>10.2}", summary.tax);
    println!("Grand total: {:>10.2}", summary.grand_total);

    let mut coordinator = CheckoutCoordinator::new(client.clone(), client);

    coordinator.set_form(DeliveryForm {
        full_name: "Example Customer".to_string(),
        email: args.email,
        mobile: "0000000000".to_string(),
        street_address: "1 Example Street".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        country: "India".to_string(),
        postal_code: "411001".to_string(),
        payment_method: "cash_on_delivery".to_string(),
    });

    let outcome = coordinator.submit(store.cart()).await?;

    store.clear_cart();

    println!("Order #{} placed", outcome.order.id);

    if let Notification::Failed(error) = outcome.notification {
        println!("Confirmation email was not sent: {error}");
    }

    Ok(())
}
