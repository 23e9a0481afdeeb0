//! # weightviz-render — text and HTML renderers
//!
//! Formats a [`weightviz_core::Explanation`] for people:
//!
//! - [`format_as_text`] produces aligned plain-text tables, optionally with
//!   ANSI-coloured documents
//! - [`HtmlRenderer`] produces an HTML fragment with weight-coloured tables
//!   and highlighted documents

pub mod error;
pub mod html;
pub mod table;
mod templates;
pub mod text;
pub mod tree;

// Re-exports
pub use error::RenderError;
pub use html::HtmlRenderer;
pub use text::format_as_text;
pub use tree::tree_to_text;
