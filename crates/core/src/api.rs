//! Storefront API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    checkout::{
        EmailNotifier, NewOrder, NotificationError, OrderConfirmation, OrderPersistence,
        OrderPersistenceError, OrderRecord,
    },
    products::{Product, ProductDraft, ProductId},
};

/// Address the API listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Errors returned by [`StorefrontClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// The server answered with a non-success status.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedResponse {
        /// HTTP status code
        status: u16,

        /// Response body, as text
        body: String,
    },
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/api` prefix
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Deleted<T> {
    product: T,
}

/// HTTP client for the storefront JSON API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when the HTTP client cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// List the catalog.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(self.url("products")).send().await?;

        decode(response).await
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or another
    /// [`ApiError`] if the request fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("products/{id}")))
            .send()
            .await?;

        decode(response).await
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let response = self
            .client
            .post(self.url("products"))
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// Replace the fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or another
    /// [`ApiError`] if the request fails.
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("products/{id}")))
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// Remove a product, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or another
    /// [`ApiError`] if the request fails.
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("products/{id}")))
            .send()
            .await?;

        let deleted: Deleted<Product> = decode(response).await?;

        Ok(deleted.product)
    }

    /// Store a submitted order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn create_order(&self, order: &NewOrder) -> Result<OrderRecord, ApiError> {
        let response = self
            .client
            .post(self.url("addresses"))
            .json(order)
            .send()
            .await?;

        decode(response).await
    }

    /// Ask the server to email an order confirmation.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn send_order_email(&self, confirmation: &OrderConfirmation) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("send-email"))
            .json(confirmation)
            .send()
            .await?;

        check(response).await?;

        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let body = text_or_empty(status, response.text().await);

    debug!(status = status.as_u16(), "api request rejected: {body}");

    Err(ApiError::UnexpectedResponse {
        status: status.as_u16(),
        body,
    })
}

fn text_or_empty(status: StatusCode, body: Result<String, reqwest::Error>) -> String {
    body.unwrap_or_else(|error| {
        warn!(
            status = status.as_u16(),
            "failed to read rejected response body: {error}"
        );

        String::new()
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(check(response).await?.json().await?)
}

#[async_trait]
impl OrderPersistence for StorefrontClient {
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrderPersistenceError> {
        Ok(StorefrontClient::create_order(self, &order).await?)
    }
}

#[async_trait]
impl EmailNotifier for StorefrontClient {
    async fn send_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<(), NotificationError> {
        Ok(self.send_order_email(&confirmation).await?)
    }
}
