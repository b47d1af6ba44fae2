//! Content DTOs: fun facts and the loading timeline.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Checkpoint;

/// Response body for `GET /fun-facts/random`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FunFactResponse {
    /// Randomly drawn fun fact.
    pub fun_fact: String,
}

/// Response body for `GET /loading-timeline`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimelineResponse {
    /// Milliseconds between progress steps.
    pub step_interval_ms: u64,
    /// Ordered status text changes from 0 to 100.
    pub checkpoints: Vec<Checkpoint>,
}
