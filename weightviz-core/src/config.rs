//! Rendering configuration.
//!
//! Uses `figment` for layered configuration: defaults -> user config file ->
//! explicit config file -> environment.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::fields::Field;

/// Options of the plain-text renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Blocks to render, in order.
    pub show: Vec<Field>,
    /// Replace spaces in feature names with a visible glyph. `None` decides
    /// per explanation.
    pub highlight_spaces: Option<bool>,
    /// Colour highlighted documents with ANSI escapes.
    pub colorize_spans: bool,
    /// Force density preservation on or off for highlighted documents.
    pub preserve_density: Option<bool>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            show: Field::ALL.to_vec(),
            highlight_spaces: None,
            colorize_spans: false,
            preserve_density: None,
        }
    }
}

/// Options of the HTML renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Prepend the shared CSS block.
    pub include_styles: bool,
    /// Show weight tables even for targets whose weights are highlighted in
    /// the document.
    pub force_weights: bool,
    /// Blocks to render, in order.
    pub show: Vec<Field>,
    /// Force density preservation on or off for highlighted documents.
    pub preserve_density: Option<bool>,
    /// Make spaces in feature names visible. `None` decides per explanation.
    pub highlight_spaces: Option<bool>,
    /// Lay out multiple targets side by side.
    pub horizontal_layout: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            force_weights: true,
            show: Field::ALL.to_vec(),
            preserve_density: None,
            highlight_spaces: None,
            horizontal_layout: true,
        }
    }
}

/// Top-level configuration for both renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub text: TextOptions,
    #[serde(default)]
    pub html: HtmlOptions,
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with `WEIGHTVIZ_`, `__` between levels)
/// 2. `config_file`, when given
/// 3. User config (`~/.config/weightviz/config.toml`)
/// 4. Built-in defaults
pub fn load_config(config_file: Option<&Path>) -> Result<RenderConfig, CoreError> {
    let mut figment = Figment::from(Serialized::defaults(RenderConfig::default()));

    if let Some(dirs) = directories::ProjectDirs::from("dev", "weightviz", "weightviz") {
        let user_config = dirs.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(path) = config_file {
        tracing::debug!(path = %path.display(), "loading render config");
        figment = figment.merge(Toml::file(path));
    }

    // WEIGHTVIZ_HTML__FORCE_WEIGHTS=false, WEIGHTVIZ_TEXT__COLORIZE_SPANS=true, ...
    figment = figment.merge(Env::prefixed("WEIGHTVIZ_").split("__"));

    Ok(figment.extract().map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.text.show, Field::ALL.to_vec());
        assert!(config.html.include_styles);
        assert!(config.html.force_weights);
        assert!(config.html.horizontal_layout);
        assert_eq!(config.html.preserve_density, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RenderConfig = toml_str(
            r#"
            [html]
            force_weights = false
            show = ["targets", "method"]
            "#,
        );
        assert!(!config.html.force_weights);
        assert_eq!(config.html.show, vec![Field::Targets, Field::Method]);
        assert!(config.html.include_styles);
        assert_eq!(config.text, TextOptions::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[text]\ncolorize_spans = true\npreserve_density = true").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.text.colorize_spans);
        assert_eq!(config.text.preserve_density, Some(true));
    }

    #[test]
    fn test_unknown_field_in_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[html]\nshow = [\"weights\"]").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(&err, CoreError::Config(msg) if msg.contains("weights")));
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[text\ncolorize_spans = ").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(CoreError::Config(_))
        ));
    }

    fn toml_str(s: &str) -> RenderConfig {
        Figment::from(Serialized::defaults(RenderConfig::default()))
            .merge(Toml::string(s))
            .extract()
            .unwrap()
    }
}
