//! Error types for the render crate.

use thiserror::Error;
use weightviz_core::CoreError;

/// Top-level render error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("preparation error: {0}")]
    Core(#[from] CoreError),
    #[error("template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
