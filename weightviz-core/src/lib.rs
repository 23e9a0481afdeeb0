//! # weightviz-core — explanation model and span preparation
//!
//! Shared foundation of the weightviz renderers:
//!
//! - **Model** — the explanation value objects (targets, feature weights,
//!   weighted spans, trees, transition matrices)
//! - **Spans** — merging weighted spans into per-character weights and
//!   sharing weight ranges across targets
//! - **Weights** — weight-range aggregation with zero fallbacks
//! - **Color** — weight to HSL colour and opacity encoding
//! - **Config** — layered renderer options

pub mod color;
pub mod config;
pub mod error;
pub mod features;
pub mod fields;
pub mod model;
pub mod spans;
pub mod weights;

// Re-exports
pub use color::{Hsl, Sign};
pub use config::{HtmlOptions, RenderConfig, TextOptions, load_config};
pub use error::CoreError;
pub use fields::Field;
pub use model::{
    Explanation, FeatureImportances, FeatureName, FeatureWeight, FeatureWeights,
    HashedCandidate, NodeInfo, SpanEntry, TargetExplanation, TargetLabel,
    TransitionFeatureWeights, TreeInfo, WeightedSpan, WeightedSpans,
};
pub use spans::{PreparedWeightedSpans, merge_weighted_spans_others, prepare_weighted_spans};
