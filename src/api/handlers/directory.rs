//! Directory search handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{DirectoryResponse, SearchParams};
use crate::app_state::AppState;

/// `GET /domains` — Pinned and main sections for a search term.
#[utoipa::path(
    get,
    path = "/api/v1/domains",
    tag = "Directory",
    summary = "Search the site directory",
    description = "Returns the directory split into a pinned section and a main section. Without `q` pinned domains are listed only in the pinned section; with `q` every case-insensitive name match is listed in the main section in directory order.",
    params(SearchParams),
    responses(
        (status = 200, description = "Directory sections", body = DirectoryResponse),
    )
)]
pub async fn list_domains(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let view = state.page_service.view(&params.q);
    tracing::debug!(search = %params.q, matches = view.total(), "directory search");
    Json(DirectoryResponse::from(&view))
}

/// Directory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/domains", get(list_domains))
}
