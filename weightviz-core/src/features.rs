//! Feature-name helpers shared by the text and HTML renderers.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Explanation, FeatureName, HashedCandidate};

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]+").expect("valid regex"));

/// Where a run of spaces sits inside a feature name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceSide {
    Left,
    Center,
    Right,
}

/// Replace every run of spaces in `s` with `replacer(run_length, side)`.
pub fn replace_spaces(s: &str, replacer: impl Fn(usize, SpaceSide) -> String) -> String {
    SPACES
        .replace_all(s, |caps: &regex::Captures<'_>| {
            let m = caps.get(0).map_or(0..0, |m| m.range());
            let side = if m.start == 0 {
                SpaceSide::Left
            } else if m.end == s.len() {
                SpaceSide::Right
            } else {
                SpaceSide::Center
            };
            replacer(m.len(), side)
        })
        .into_owned()
}

/// Prefix a hashed candidate with `(-)` when its sign is negative.
pub fn format_signed(candidate: &HashedCandidate, format_name: impl Fn(&str) -> String) -> String {
    let prefix = if candidate.sign > 0.0 { "" } else { "(-)" };
    format!("{prefix}{}", format_name(&candidate.name))
}

fn has_invisible_spaces(name: &FeatureName) -> bool {
    match name {
        FeatureName::Preformatted { .. } => false,
        FeatureName::Hashed(candidates) => candidates
            .iter()
            .any(|c| c.name.starts_with(' ') || c.name.ends_with(' ')),
        FeatureName::Plain(_) | FeatureName::Bytes(_) => name
            .as_text()
            .is_some_and(|s| s.starts_with(' ') || s.ends_with(' ')),
    }
}

/// Whether spaces in feature names should be made visible.
///
/// True when the explanation asks for it, or when any feature name starts or
/// ends with a space and would otherwise be ambiguous.
pub fn should_highlight_spaces(expl: &Explanation) -> bool {
    if expl.highlight_spaces.unwrap_or(false) {
        return true;
    }
    let importances = expl
        .feature_importances
        .iter()
        .flat_map(|fi| fi.importances.iter());
    let target_weights = expl
        .targets()
        .iter()
        .filter_map(|t| t.feature_weights.as_ref())
        .flat_map(|fw| fw.iter());
    importances
        .chain(target_weights)
        .any(|fw| has_invisible_spaces(&fw.feature))
}

/// Whether any target weight carries a feature value.
pub fn has_any_values_for_weights(expl: &Explanation) -> bool {
    expl.targets()
        .iter()
        .filter_map(|t| t.feature_weights.as_ref())
        .flat_map(|fw| fw.iter())
        .any(|fw| fw.value.is_some())
}
