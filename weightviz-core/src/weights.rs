//! Weight ranges used to normalize colours across tables and targets.

use crate::model::{FeatureImportances, FeatureWeights, TargetExplanation};

/// Maximum absolute value, or 0 when `values` is empty.
pub fn max_or_0(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().map(f64::abs).fold(0.0, f64::max)
}

/// Max absolute weight over the positive and negative weights.
pub fn feature_weights_range(weights: &FeatureWeights) -> f64 {
    max_or_0(weights.iter().map(|fw| fw.weight))
}

/// Max absolute importance, 0 when importances are absent.
pub fn feature_importances_range(importances: Option<&FeatureImportances>) -> f64 {
    max_or_0(
        importances
            .into_iter()
            .flat_map(|fi| fi.importances.iter())
            .map(|fw| fw.weight),
    )
}

/// Weight range shared by the weight tables of all targets.
pub fn targets_weight_range(targets: &[TargetExplanation]) -> f64 {
    max_or_0(
        targets
            .iter()
            .filter_map(|t| t.feature_weights.as_ref())
            .map(feature_weights_range),
    )
}

/// Weight range shared by the "other" tables of all targets.
pub fn others_weight_range(others: &[Option<FeatureWeights>]) -> f64 {
    max_or_0(others.iter().flatten().map(feature_weights_range))
}

/// `range`, or 1 when it is zero, so it can be used as a divisor.
pub fn nonzero_range(range: f64) -> f64 {
    if range > 0.0 { range } else { 1.0 }
}
