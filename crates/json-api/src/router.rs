//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{AllowOrigin, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{addresses, email, healthcheck, observability, products, state::State};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("addresses")
                .get(addresses::index::handler)
                .post(addresses::create::handler)
                .push(
                    Router::with_path("{address}")
                        .get(addresses::get::handler)
                        .put(addresses::update::handler)
                        .delete(addresses::delete::handler),
                ),
        )
        .push(Router::with_path("send-email").post(email::send::handler))
}

/// Full service: API routes, health, OpenAPI docs, CORS and trailing slash handling.
///
/// CORS and slash removal hoop on the service so they run before route matching.
pub(crate) fn service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("api").push(app_router()));

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers("content-type")
        .into_handler();

    Service::new(router).hoop(cors).hoop(remove_slash())
}
