//! Domain layer: subdomain records, the directory, and page content.
//!
//! Everything here is built once at startup from the static data files
//! and is read-only afterwards. Searches derive fresh views from the
//! [`DomainDirectory`] without mutating it.

pub mod content;
pub mod directory;
pub mod loading;
pub mod site;

pub use content::{ContentCatalog, RequestId};
pub use directory::{DirectoryView, DomainDirectory};
pub use loading::{Checkpoint, LoadingTimeline};
pub use site::Domain;
