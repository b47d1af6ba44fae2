//! Directory DTOs for `GET /domains`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DirectoryView, Domain};

/// Query parameters for directory searches and the 404 page.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring matched against domain names. Empty or
    /// absent means no search.
    #[serde(default)]
    pub q: String,
}

/// One domain as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DomainDto {
    /// Display name.
    pub name: String,
    /// Absolute link target.
    pub url: String,
    /// Pinned flag.
    pub pinned: bool,
    /// Uppercased first character, used as the avatar glyph.
    pub initial: String,
}

impl From<&Domain> for DomainDto {
    fn from(domain: &Domain) -> Self {
        Self {
            name: domain.name.clone(),
            url: domain.url.clone(),
            pinned: domain.pinned,
            initial: domain.initial(),
        }
    }
}

/// Response body for `GET /domains`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DirectoryResponse {
    /// Search term echoed from the request.
    pub search: String,
    /// Whether a search is active.
    pub searching: bool,
    /// Heading of the main section (`"All Sites"` or `"Search Results"`).
    pub heading: String,
    /// Pinned section; empty while searching.
    pub pinned: Vec<DomainDto>,
    /// Main / results section.
    pub main: Vec<DomainDto>,
    /// Whether the search matched anything.
    pub has_results: bool,
    /// Number of domains across both sections.
    pub total: usize,
}

impl From<&DirectoryView<'_>> for DirectoryResponse {
    fn from(view: &DirectoryView<'_>) -> Self {
        Self {
            search: view.search.to_string(),
            searching: view.is_searching(),
            heading: view.heading().to_string(),
            pinned: view.pinned.iter().map(|d| DomainDto::from(*d)).collect(),
            main: view.main.iter().map(|d| DomainDto::from(*d)).collect(),
            has_results: view.has_results,
            total: view.total(),
        }
    }
}
