//! On-disk payload shapes of the static data files.

use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// Contents of `domains.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainsFile {
    /// Every linkable subdomain.
    pub domains: Vec<Domain>,
}

/// Contents of `funFacts.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunFactsFile {
    /// Fun facts shown one at a time.
    pub fun_facts: Vec<String>,
}

/// Contents of `loadingMessages.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadingMessagesFile {
    /// Status messages cycled by the progress bar.
    pub messages: Vec<String>,
}
