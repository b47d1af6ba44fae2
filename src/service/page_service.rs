//! Page service: read-only queries over the loaded site data.

use chrono::{Datelike, Utc};

use crate::data::SiteData;
use crate::domain::{ContentCatalog, DirectoryView, DomainDirectory, RequestId};
use crate::error::PageError;
use crate::page::{PageContext, render_page};

/// Read-only coordinator over the directory and content catalog.
///
/// Built once at startup and shared behind an `Arc`. Every method is a
/// pure derivation from the loaded data plus the request's inputs, so
/// no locking is needed.
#[derive(Debug, Clone)]
pub struct PageService {
    site_name: String,
    directory: DomainDirectory,
    content: ContentCatalog,
}

impl PageService {
    /// Creates a new `PageService` for `site_name`.
    #[must_use]
    pub fn new(site_name: impl Into<String>, data: SiteData) -> Self {
        Self {
            site_name: site_name.into(),
            directory: data.directory,
            content: data.content,
        }
    }

    /// Apex domain named in the page copy.
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Returns a reference to the inner [`DomainDirectory`].
    #[must_use]
    pub fn directory(&self) -> &DomainDirectory {
        &self.directory
    }

    /// Returns a reference to the inner [`ContentCatalog`].
    #[must_use]
    pub fn content(&self) -> &ContentCatalog {
        &self.content
    }

    /// Derives the directory sections for `term`.
    #[must_use]
    pub fn view<'a>(&'a self, term: &'a str) -> DirectoryView<'a> {
        self.directory.view(term)
    }

    /// Draws a fun fact with the thread-local RNG.
    #[must_use]
    pub fn random_fun_fact(&self) -> Option<&str> {
        self.content.random_fun_fact(&mut rand::thread_rng())
    }

    /// Draws a fresh request identifier with the thread-local RNG.
    #[must_use]
    pub fn new_request_id(&self) -> RequestId {
        RequestId::generate(&mut rand::thread_rng())
    }

    /// Renders the full 404 page with the directory filtered by `term`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Internal`] if the page cannot be rendered.
    pub fn render_not_found(
        &self,
        term: &str,
        request_id: &RequestId,
    ) -> Result<String, PageError> {
        let view = self.directory.view(term);
        render_page(&PageContext {
            site_name: &self.site_name,
            request_id,
            fun_fact: self.random_fun_fact(),
            view: &view,
            timeline: self.content.timeline(),
            year: Utc::now().year(),
        })
    }
}
