//! Static data layer: JSON payload shapes and the file loader.
//!
//! The domain list, fun facts, and loading messages are read once at
//! startup. Validation (non-empty names, absolute URLs, unique names)
//! happens here so the rest of the service can treat the data as sound.

pub mod loader;
pub mod models;

pub use loader::{SiteData, load_site_data};
