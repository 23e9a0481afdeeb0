//! Weighted span preparation.
//!
//! Turns the `(feature, ranges, weight)` entries of each analyzed document
//! into a dense per-character weight vector, and picks a weight range per
//! document slot that is shared by all targets, so highlighting intensity is
//! comparable between targets explained with the same vectorizer.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::model::{FeatureWeights, TargetExplanation, WeightedSpan};
use crate::weights::{max_or_0, nonzero_range};

/// A document with its merged per-character weights.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedWeightedSpans<'a> {
    pub weighted_span: &'a WeightedSpan,
    /// Name of the vectorizer group the document belongs to.
    pub vec_name: Option<&'a str>,
    /// One weight per character of the document; 0 where nothing is highlighted.
    pub char_weights: Vec<f64>,
    /// Max absolute char weight shared by this document slot across targets.
    pub weight_range: f64,
}

impl PreparedWeightedSpans<'_> {
    /// Document characters paired with their weights.
    pub fn chars(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.weighted_span
            .document
            .chars()
            .zip(self.char_weights.iter().copied())
    }
}

/// Merge the span entries of a document into per-character weights.
///
/// Every character covered by an entry gets that entry's weight added; with
/// `preserve_density` the weight is first divided by the number of characters
/// the entry covers, so each entry contributes its weight exactly once.
pub fn char_weights(ws: &WeightedSpan, preserve_density: bool) -> Result<Vec<f64>, CoreError> {
    let len = ws.document.chars().count();
    let mut weights = vec![0.0; len];

    for entry in &ws.spans {
        for &(start, end) in &entry.ranges {
            if start > end {
                return Err(CoreError::InvertedRange {
                    feature: entry.feature.clone(),
                    start,
                    end,
                });
            }
            if end > len {
                return Err(CoreError::SpanOutOfBounds {
                    feature: entry.feature.clone(),
                    analyzer: ws.analyzer.clone(),
                    start,
                    end,
                    len,
                });
            }
        }

        let covered = entry.covered_chars();
        if covered == 0 {
            continue;
        }
        let weight = if preserve_density {
            entry.weight / covered as f64
        } else {
            entry.weight
        };
        for &(start, end) in &entry.ranges {
            for w in &mut weights[start..end] {
                *w += weight;
            }
        }
    }

    Ok(weights)
}

/// Documents are grouped across targets by vectorizer and slot within it.
type SlotKey<'a> = (Option<&'a str>, usize);

/// Prepare the weighted spans of all targets.
///
/// `preserve_density` forces the density mode for every document; `None`
/// uses each document's own setting. The result has one element per target,
/// `None` for targets without weighted spans.
pub fn prepare_weighted_spans<'a>(
    targets: &'a [TargetExplanation],
    preserve_density: Option<bool>,
) -> Result<Vec<Option<Vec<PreparedWeightedSpans<'a>>>>, CoreError> {
    let mut merged: Vec<Option<Vec<(SlotKey<'a>, &'a WeightedSpan, Vec<f64>)>>> =
        Vec::with_capacity(targets.len());
    let mut slot_ranges: HashMap<SlotKey<'a>, f64> = HashMap::new();

    for target in targets {
        let Some(groups) = target.weighted_spans.as_ref().filter(|_| target.has_weighted_spans())
        else {
            merged.push(None);
            continue;
        };
        let mut docs = Vec::new();
        for group in groups {
            let vec_name = group.vec_name.as_deref();
            for (slot, ws) in group.docs.iter().enumerate() {
                let density = preserve_density.or(ws.preserve_density).unwrap_or(false);
                let weights = char_weights(ws, density)?;
                let local_range = max_or_0(weights.iter().copied());
                let key = (vec_name, slot);
                let shared = slot_ranges.entry(key).or_insert(0.0);
                *shared = shared.max(local_range);
                docs.push((key, ws, weights));
            }
        }
        merged.push(Some(docs));
    }

    tracing::debug!(
        targets = targets.len(),
        slots = slot_ranges.len(),
        "prepared weighted spans"
    );

    Ok(merged
        .into_iter()
        .map(|docs| {
            docs.map(|docs| {
                docs.into_iter()
                    .map(|(key, ws, char_weights)| PreparedWeightedSpans {
                        weighted_span: ws,
                        vec_name: key.0,
                        char_weights,
                        weight_range: nonzero_range(slot_ranges[&key]),
                    })
                    .collect()
            })
        })
        .collect())
}

/// Merge the "other" weights of all span groups of a target.
///
/// Returns `None` when the target has no weighted spans or none of its groups
/// carries other weights.
pub fn merge_weighted_spans_others(target: &TargetExplanation) -> Option<FeatureWeights> {
    if !target.has_weighted_spans() {
        return None;
    }
    let others: Vec<&FeatureWeights> = target
        .weighted_spans
        .iter()
        .flatten()
        .filter_map(|group| group.other.as_ref())
        .collect();
    if others.is_empty() {
        return None;
    }

    let mut pos: Vec<_> = others.iter().flat_map(|o| o.pos.iter().cloned()).collect();
    let mut neg: Vec<_> = others.iter().flat_map(|o| o.neg.iter().cloned()).collect();
    pos.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    neg.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let sum_remaining = |f: fn(&FeatureWeights) -> Option<usize>| {
        let counts: Vec<usize> = others.iter().filter_map(|o| f(o)).collect();
        (!counts.is_empty()).then(|| counts.iter().sum::<usize>())
    };

    Some(FeatureWeights {
        pos,
        neg,
        pos_remaining: sum_remaining(|o| o.pos_remaining),
        neg_remaining: sum_remaining(|o| o.neg_remaining),
    })
}
