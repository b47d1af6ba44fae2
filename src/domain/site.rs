//! A single linkable subdomain record.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// One subdomain shown in the "All sites" directory.
///
/// `name` is the identity key of the record and must be unique within a
/// collection; `url` is the absolute link target opened in a new browsing
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Display name (non-empty, unique within the collection).
    pub name: String,
    /// Absolute link target.
    pub url: String,
    /// Whether the domain is surfaced in the pinned section.
    #[serde(default)]
    pub pinned: bool,
}

impl Domain {
    /// Creates an unpinned domain.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            pinned: false,
        }
    }

    /// Returns the same domain with the pinned flag set.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Uppercased first character of the name, used as the avatar glyph.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Checks that the record is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidDomain`] if the name is blank or the URL
    /// is not an absolute `http`/`https` URL with a host.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.name.trim().is_empty() {
            return Err(PageError::InvalidDomain {
                name: self.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if !is_absolute_http_url(&self.url) {
            return Err(PageError::InvalidDomain {
                name: self.name.clone(),
                reason: format!("url {:?} is not an absolute http(s) URL", self.url),
            });
        }
        Ok(())
    }
}

/// Returns `true` for `http://host...` or `https://host...` with a non-empty
/// host and no whitespace.
fn is_absolute_http_url(url: &str) -> bool {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    !host.is_empty() && !host.starts_with(':')
}
