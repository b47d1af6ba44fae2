//! The decorative 404 page: fallback handler and HTML template.
//!
//! Markup is written with `maud::html!`, which escapes every spliced value;
//! only the stylesheet, the inline script and the serialized timeline are
//! inserted pre-escaped.

pub mod handler;
pub mod template;

pub use template::{PageContext, render_page};
