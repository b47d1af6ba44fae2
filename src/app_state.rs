//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::PageService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only page service over the loaded site data.
    pub page_service: Arc<PageService>,
}

impl AppState {
    /// Wraps a [`PageService`] for sharing across handlers.
    #[must_use]
    pub fn new(page_service: PageService) -> Self {
        Self {
            page_service: Arc::new(page_service),
        }
    }
}
