//! Fun fact and loading timeline handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{FunFactResponse, TimelineResponse};
use crate::app_state::AppState;
use crate::domain::loading::STEP_INTERVAL_MS;
use crate::error::{ErrorResponse, PageError};

/// `GET /fun-facts/random` — One randomly drawn fun fact.
///
/// # Errors
///
/// Returns [`PageError::NoFunFacts`] if the fun-fact list is empty.
#[utoipa::path(
    get,
    path = "/api/v1/fun-facts/random",
    tag = "Content",
    summary = "Random fun fact",
    description = "Draws one fun fact uniformly from the configured list.",
    responses(
        (status = 200, description = "A fun fact", body = FunFactResponse),
        (status = 404, description = "No fun facts configured", body = ErrorResponse),
    )
)]
pub async fn random_fun_fact(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let fun_fact = state
        .page_service
        .random_fun_fact()
        .ok_or(PageError::NoFunFacts)?
        .to_string();
    Ok(Json(FunFactResponse { fun_fact }))
}

/// `GET /loading-timeline` — Progress checkpoints for the status text.
#[utoipa::path(
    get,
    path = "/api/v1/loading-timeline",
    tag = "Content",
    summary = "Loading status timeline",
    description = "Returns the progress values at which the status text changes, from 0 to 100, and the step interval.",
    responses(
        (status = 200, description = "Timeline checkpoints", body = TimelineResponse),
    )
)]
pub async fn loading_timeline(State(state): State<AppState>) -> impl IntoResponse {
    Json(TimelineResponse {
        step_interval_ms: STEP_INTERVAL_MS,
        checkpoints: state.page_service.content().timeline().checkpoints(),
    })
}

/// Content routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fun-facts/random", get(random_fun_fact))
        .route("/loading-timeline", get(loading_timeline))
}
