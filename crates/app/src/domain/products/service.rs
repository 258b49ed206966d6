//! Products service.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{Product, ProductId};
use tracing::info;

use crate::{
    collection::JsonFileCollection,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
    },
};

#[derive(Debug)]
pub struct JsonProductsService {
    collection: JsonFileCollection<Product>,
}

impl JsonProductsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonFileCollection::new(path),
        }
    }
}

#[async_trait]
impl ProductsService for JsonProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.collection.list().await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        self.collection
            .get(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        let created = self
            .collection
            .insert_with(|id| product.into_product(id))
            .await?;

        info!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        update.validate()?;

        self.collection
            .update_with(product, |existing| update.apply(existing))
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let deleted = self
            .collection
            .delete(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        info!(product_id = %deleted.id, "deleted product");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Creates a new product, assigning the next free id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Updates the given product with the fields present in `update`.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product, returning it.
    async fn delete_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;
}
