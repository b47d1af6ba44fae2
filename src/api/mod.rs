//! REST API layer: route handlers, DTOs, and the OpenAPI document.
//!
//! Resource endpoints are mounted under `/api/v1`; `/health` lives at the
//! root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "not-found-page",
        description = "Decorative 404 page with a searchable directory of sibling subdomains."
    ),
    paths(
        handlers::directory::list_domains,
        handlers::content::random_fun_fact,
        handlers::content::loading_timeline,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Directory", description = "Site directory search"),
        (name = "Content", description = "Decorative page content"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}
