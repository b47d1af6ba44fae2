//! Fallback handler serving the 404 page for every unmatched path.

use axum::extract::rejection::QueryRejection;
use axum::extract::{OriginalUri, Query, State};
use axum::http::header::HeaderName;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::api::dto::SearchParams;
use crate::app_state::AppState;
use crate::error::PageError;

/// Response header echoing the request id shown on the page.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Any unmatched path: the 404 page with the "All sites" directory.
///
/// The `q` query parameter filters the directory. A malformed query
/// string is treated as no search. A rendering failure is answered with
/// the JSON 500 body of [`PageError::Internal`].
pub async fn not_found_page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, PageError> {
    let term = match query {
        Ok(Query(params)) => params.q,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring malformed query string");
            String::new()
        }
    };

    let service = &state.page_service;
    let request_id = service.new_request_id();
    tracing::debug!(path = %uri.path(), %request_id, search = %term, "serving 404 page");

    let html = service.render_not_found(&term, &request_id)?;
    let mut response = (StatusCode::NOT_FOUND, Html(html)).into_response();
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    Ok(response)
}
