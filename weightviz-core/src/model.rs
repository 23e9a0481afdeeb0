//! Explanation data model.
//!
//! These are the value objects produced by model introspection upstream and
//! consumed by the renderers. They are never mutated during rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Feature names and weights
// ---------------------------------------------------------------------------

/// One candidate original feature behind a hashed feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashedCandidate {
    pub name: String,
    /// Sign of the hashing collision; negative signs are shown as `(-)`.
    pub sign: f64,
}

/// A feature identifier.
///
/// Deserializes untagged: a JSON string is [`FeatureName::Plain`], a list of
/// `{name, sign}` objects is [`FeatureName::Hashed`], a list of byte values is
/// [`FeatureName::Bytes`] and `{"formatted": ...}` is
/// [`FeatureName::Preformatted`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureName {
    Plain(String),
    Hashed(Vec<HashedCandidate>),
    Bytes(Vec<u8>),
    Preformatted { formatted: String },
}

impl FeatureName {
    /// Text of a plain or byte-string name, `None` for the other shapes.
    pub fn as_text(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            FeatureName::Plain(s) => Some(std::borrow::Cow::Borrowed(s.as_str())),
            FeatureName::Bytes(b) => Some(String::from_utf8_lossy(b)),
            FeatureName::Hashed(_) | FeatureName::Preformatted { .. } => None,
        }
    }
}

impl From<&str> for FeatureName {
    fn from(s: &str) -> Self {
        FeatureName::Plain(s.to_string())
    }
}

impl From<String> for FeatureName {
    fn from(s: String) -> Self {
        FeatureName::Plain(s)
    }
}

/// A single feature and its contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: FeatureName,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl FeatureWeight {
    pub fn new(feature: impl Into<FeatureName>, weight: f64) -> Self {
        Self {
            feature: feature.into(),
            weight,
            std: None,
            value: None,
        }
    }

    pub fn with_std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Positive and negative feature weights of one target, already sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    #[serde(default)]
    pub pos: Vec<FeatureWeight>,
    #[serde(default)]
    pub neg: Vec<FeatureWeight>,
    /// Number of positive features elided from `pos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_remaining: Option<usize>,
    /// Number of negative features elided from `neg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neg_remaining: Option<usize>,
}

impl FeatureWeights {
    pub fn new(pos: Vec<FeatureWeight>, neg: Vec<FeatureWeight>) -> Self {
        Self {
            pos,
            neg,
            pos_remaining: None,
            neg_remaining: None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureWeight> {
        self.pos.iter().chain(self.neg.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
            && self.neg.is_empty()
            && self.pos_remaining.unwrap_or(0) == 0
            && self.neg_remaining.unwrap_or(0) == 0
    }
}

/// Global feature importances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportances {
    pub importances: Vec<FeatureWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<usize>,
}

impl FeatureImportances {
    pub fn is_empty(&self) -> bool {
        self.importances.is_empty() && self.remaining.unwrap_or(0) == 0
    }
}

// ---------------------------------------------------------------------------
// Weighted spans
// ---------------------------------------------------------------------------

/// A feature highlighted in a document: its character ranges and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanEntry {
    pub feature: String,
    /// Half-open character offsets into the document.
    pub ranges: Vec<(usize, usize)>,
    pub weight: f64,
}

impl SpanEntry {
    pub fn new(feature: impl Into<String>, ranges: Vec<(usize, usize)>, weight: f64) -> Self {
        Self {
            feature: feature.into(),
            ranges,
            weight,
        }
    }

    /// Number of characters covered by all ranges of this entry.
    pub fn covered_chars(&self) -> usize {
        self.ranges
            .iter()
            .map(|&(start, end)| end.saturating_sub(start))
            .sum()
    }
}

/// Weighted spans produced by one analyzer over one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSpan {
    /// Tokenization granularity, e.g. `char` or `word`.
    pub analyzer: String,
    pub document: String,
    pub spans: Vec<SpanEntry>,
    /// Default density mode for this document when the caller does not force one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_density: Option<bool>,
}

impl WeightedSpan {
    pub fn new(
        analyzer: impl Into<String>,
        document: impl Into<String>,
        spans: Vec<SpanEntry>,
    ) -> Self {
        Self {
            analyzer: analyzer.into(),
            document: document.into(),
            spans,
            preserve_density: None,
        }
    }
}

/// Weighted spans of one vectorizer, one entry per analyzed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedSpans {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vec_name: Option<String>,
    pub docs: Vec<WeightedSpan>,
    /// Weights that could not be highlighted in the documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<FeatureWeights>,
}

impl WeightedSpans {
    pub fn new(docs: Vec<WeightedSpan>) -> Self {
        Self {
            vec_name: None,
            docs,
            other: None,
        }
    }

    pub fn with_vec_name(mut self, vec_name: impl Into<String>) -> Self {
        self.vec_name = Some(vec_name.into());
        self
    }

    pub fn with_other(mut self, other: FeatureWeights) -> Self {
        self.other = Some(other);
        self
    }
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// Class name or index of a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetLabel {
    Index(i64),
    Name(String),
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLabel::Index(i) => write!(f, "{i}"),
            TargetLabel::Name(name) => write!(f, "'{}'", name.replace('\'', "\\'")),
        }
    }
}

impl From<&str> for TargetLabel {
    fn from(s: &str) -> Self {
        TargetLabel::Name(s.to_string())
    }
}

impl From<i64> for TargetLabel {
    fn from(i: i64) -> Self {
        TargetLabel::Index(i)
    }
}

/// Explanation of a single prediction target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetExplanation {
    pub target: TargetLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proba: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_weights: Option<FeatureWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_spans: Option<Vec<WeightedSpans>>,
}

impl TargetExplanation {
    pub fn new(target: impl Into<TargetLabel>) -> Self {
        Self {
            target: target.into(),
            proba: None,
            score: None,
            feature_weights: None,
            weighted_spans: None,
        }
    }

    pub fn with_feature_weights(mut self, weights: FeatureWeights) -> Self {
        self.feature_weights = Some(weights);
        self
    }

    pub fn with_weighted_spans(mut self, spans: Vec<WeightedSpans>) -> Self {
        self.weighted_spans = Some(spans);
        self
    }

    pub fn with_proba(mut self, proba: f64) -> Self {
        self.proba = Some(proba);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn has_weighted_spans(&self) -> bool {
        self.weighted_spans
            .as_ref()
            .is_some_and(|groups| groups.iter().any(|g| !g.docs.is_empty()))
    }
}

// ---------------------------------------------------------------------------
// Transition features and decision trees
// ---------------------------------------------------------------------------

/// Weights of label transitions in a sequence model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionFeatureWeights {
    pub class_names: Vec<String>,
    /// `coef[from][to]`.
    pub coef: Vec<Vec<f64>>,
}

impl TransitionFeatureWeights {
    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty()
    }
}

/// A node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: usize,
    pub is_leaf: bool,
    pub value: Vec<f64>,
    pub value_ratio: Vec<f64>,
    pub sample_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<NodeInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<NodeInfo>>,
}

/// A fitted decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeInfo {
    pub criterion: String,
    pub tree: NodeInfo,
    /// Graphviz source, rendered elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphviz: Option<String>,
    #[serde(default = "default_true")]
    pub is_classification: bool,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// A complete model explanation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub is_regression: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetExplanation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importances: Option<FeatureImportances>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_tree: Option<TreeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_features: Option<TransitionFeatureWeights>,
    /// Force space highlighting in feature names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_spaces: Option<bool>,
}

impl Explanation {
    pub fn targets(&self) -> &[TargetExplanation] {
        self.targets.as_deref().unwrap_or_default()
    }

    /// Parse an explanation from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feature_name_untagged_shapes() {
        let names: Vec<FeatureName> = serde_json::from_str(
            r#"["word", [{"name": "a", "sign": 1.0}, {"name": "b", "sign": -1.0}], [104, 105], {"formatted": "<BIAS>"}]"#,
        )
        .unwrap();
        assert_eq!(
            names,
            vec![
                FeatureName::Plain("word".into()),
                FeatureName::Hashed(vec![
                    HashedCandidate { name: "a".into(), sign: 1.0 },
                    HashedCandidate { name: "b".into(), sign: -1.0 },
                ]),
                FeatureName::Bytes(b"hi".to_vec()),
                FeatureName::Preformatted { formatted: "<BIAS>".into() },
            ]
        );
    }

    #[test]
    fn test_target_label_display() {
        assert_eq!(TargetLabel::from("sunny").to_string(), "'sunny'");
        assert_eq!(TargetLabel::from(3).to_string(), "3");
    }

    #[test]
    fn test_explanation_from_json_defaults() {
        let expl = Explanation::from_json(r#"{"method": "linear model"}"#).unwrap();
        assert_eq!(expl.method.as_deref(), Some("linear model"));
        assert!(!expl.is_regression);
        assert!(expl.targets().is_empty());
    }

    #[test]
    fn test_covered_chars_sums_ranges() {
        let entry = SpanEntry::new("ab", vec![(0, 2), (5, 7)], 1.0);
        assert_eq!(entry.covered_chars(), 4);
    }

    #[test]
    fn test_has_weighted_spans_ignores_empty_groups() {
        let target = TargetExplanation::new("a").with_weighted_spans(vec![WeightedSpans::new(vec![])]);
        assert!(!target.has_weighted_spans());
    }
}
