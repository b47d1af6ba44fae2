//! Service layer: answers page and directory queries.
//!
//! [`PageService`] owns the immutable site data and derives directory
//! views, random content, and the rendered 404 page on demand.

pub mod page_service;

pub use page_service::PageService;
