//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
    state::State,
};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub message: String,

    /// The removed product
    pub product: ProductResponse,
}

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.delete", skip(product, depot), err)]
pub(crate) async fn handler(
    product: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state
        .app
        .products
        .delete_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted".to_string(),
        product: deleted.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront::products::ProductId;
    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_returns_the_removed_product() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::new(3))
            .return_once(|_| Ok(make_product(3)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete("http://example.com/products/3")
            .send(&make_service(repo))
            .await;

        let body: ProductDeletedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Product deleted");
        assert_eq!(body.product.id, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let res = TestClient::delete("http://example.com/products/3")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_non_numeric_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/products/first")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
