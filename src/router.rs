//! Router composition: REST API, 404 page fallback, and HTTP layers.

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::page::handler::not_found_page;

/// Builds the full application router.
///
/// `/health` and `/api/v1/*` answer JSON; every other path falls through
/// to the HTML 404 page.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    let router = Router::new()
        .merge(api::build_router())
        .fallback(not_found_page)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);
    with_swagger_ui(router)
}

#[cfg(feature = "swagger-ui")]
fn with_swagger_ui(router: Router) -> Router {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    router.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn with_swagger_ui(router: Router) -> Router {
    router
}
