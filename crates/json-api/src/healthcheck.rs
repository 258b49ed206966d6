//! Storefront JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        status: format!("Server is running on port {}", state.port),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{TEST_PORT, strict_state};

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_reports_port() -> TestResult {
        let router = Router::new()
            .hoop(inject(strict_state()))
            .push(Router::with_path("health").get(handler));

        let response: HealthResponse = TestClient::get("http://example.com/health")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.status,
            format!("Server is running on port {TEST_PORT}")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_without_state_returns_500() -> TestResult {
        let router = Router::new().push(Router::with_path("health").get(handler));

        let res = TestClient::get("http://example.com/health")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
