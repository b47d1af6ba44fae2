//! # not-found-page
//!
//! Decorative "404 Not Found" page service with a searchable directory of
//! sibling subdomains.
//!
//! Every unmatched path is answered with a server-rendered 404 page: an
//! animated progress bar with rotating status text, a random fun fact, and
//! an "All sites" dialog listing the known subdomains. The same directory
//! is exposed as JSON under `/api/v1`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (browser, HTTP)
//!     │
//!     ├── 404 page fallback (page/)
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PageService (service/)
//!     │
//!     ├── DomainDirectory, ContentCatalog (domain/)
//!     │
//!     └── Static JSON data files (data/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod page;
pub mod router;
pub mod service;
