//! Loads and validates the static data files.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::models::{DomainsFile, FunFactsFile, LoadingMessagesFile};
use crate::domain::{ContentCatalog, Domain, DomainDirectory};
use crate::error::PageError;

/// Everything the page needs, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    /// Sorted domain directory.
    pub directory: DomainDirectory,
    /// Fun facts and loading timeline.
    pub content: ContentCatalog,
}

/// Reads the three data files and builds the directory and catalog.
///
/// # Errors
///
/// Returns [`PageError::DataRead`] or [`PageError::DataParse`] if a file is
/// missing or malformed, [`PageError::InvalidDomain`] for a bad record and
/// [`PageError::DuplicateDomain`] if two records share a name.
pub async fn load_site_data(
    domains_path: &Path,
    fun_facts_path: &Path,
    loading_messages_path: &Path,
) -> Result<SiteData, PageError> {
    let DomainsFile { domains } = read_json(domains_path).await?;
    let FunFactsFile { fun_facts } = read_json(fun_facts_path).await?;
    let LoadingMessagesFile { messages } = read_json(loading_messages_path).await?;

    let domains = validate_domains(domains)?;
    let directory = DomainDirectory::initialize(domains);

    tracing::info!(
        domains = directory.len(),
        pinned = directory.pinned_count(),
        fun_facts = fun_facts.len(),
        loading_messages = messages.len(),
        "site data loaded"
    );
    if fun_facts.is_empty() {
        tracing::warn!(path = %fun_facts_path.display(), "no fun facts configured");
    }

    Ok(SiteData {
        directory,
        content: ContentCatalog::new(fun_facts, messages),
    })
}

/// Checks every record and rejects duplicate names.
///
/// # Errors
///
/// Returns the first [`PageError::InvalidDomain`] or
/// [`PageError::DuplicateDomain`] encountered, in input order.
pub fn validate_domains(domains: Vec<Domain>) -> Result<Vec<Domain>, PageError> {
    check_domains(&domains)?;
    Ok(domains)
}

fn check_domains(domains: &[Domain]) -> Result<(), PageError> {
    let mut seen = HashSet::with_capacity(domains.len());
    for domain in domains {
        domain.validate()?;
        if !seen.insert(domain.name.as_str()) {
            return Err(PageError::DuplicateDomain(domain.name.clone()));
        }
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PageError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PageError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| PageError::DataParse {
        path: path.to_path_buf(),
        source,
    })
}
