//! Products Data

use rust_decimal::Decimal;
use storefront::products::{PLACEHOLDER_IMAGE, Product, ProductId};

use crate::domain::products::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl NewProduct {
    /// Check the submitted fields.
    ///
    /// # Errors
    ///
    /// [`ProductsServiceError::MissingRequiredData`] without a name or price,
    /// [`ProductsServiceError::InvalidData`] for a negative price.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let price = self
            .price
            .ok_or(ProductsServiceError::MissingRequiredData)?;

        check_price(price)
    }

    /// Build the stored product, filling in defaults.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: image_or_placeholder(self.image),
        }
    }
}

/// Product Update Data
///
/// Only the fields that are present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductUpdate {
    /// Check the fields that are present.
    ///
    /// # Errors
    ///
    /// [`ProductsServiceError::MissingRequiredData`] for a blank name,
    /// [`ProductsServiceError::InvalidData`] for a negative price.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if let Some(price) = self.price {
            check_price(price)?;
        }

        Ok(())
    }

    /// Merge into `product`. The identifier is never changed.
    pub fn apply(self, product: Product) -> Product {
        Product {
            id: product.id,
            name: self.name.unwrap_or(product.name),
            price: self.price.unwrap_or(product.price),
            description: self.description.unwrap_or(product.description),
            image: match self.image {
                Some(image) => image_or_placeholder(Some(image)),
                None => product.image,
            },
        }
    }
}

fn check_price(price: Decimal) -> Result<(), ProductsServiceError> {
    if price < Decimal::ZERO {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

fn image_or_placeholder(image: Option<String>) -> String {
    image
        .filter(|image| !image.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}
