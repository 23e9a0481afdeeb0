//! Plain-text renderer.

use weightviz_core::features::{
    format_signed, has_any_values_for_weights, replace_spaces, should_highlight_spaces,
};
use weightviz_core::spans::prepare_weighted_spans;
use weightviz_core::{
    Explanation, FeatureImportances, FeatureName, Field, PreparedWeightedSpans,
    TargetExplanation, TextOptions, TransitionFeatureWeights,
};

use crate::error::RenderError;
use crate::table::{Cell, Table, center, display_width};
use crate::tree::tree_to_text;

const PLUS_MINUS: &str = "±";
const ELLIPSIS: &str = "…";
const SPACE: &str = "░";

/// Format an explanation as plain text.
///
/// The error, if any, always comes first; then every field of
/// `options.show` that is present on the explanation, in order.
pub fn format_as_text(expl: &Explanation, options: &TextOptions) -> Result<String, RenderError> {
    let hl_spaces = options
        .highlight_spaces
        .unwrap_or_else(|| should_highlight_spaces(expl));
    let mut lines: Vec<String> = Vec::new();

    if let Some(error) = &expl.error {
        lines.push(format!("Error: {error}"));
    }

    for field in &options.show {
        match field {
            Field::Method => {
                if let Some(method) = expl.method.as_deref().filter(|m| !m.is_empty()) {
                    lines.push(format!("Explained as: {method}"));
                }
            }
            Field::Description => {
                if let Some(description) = expl.description.as_deref().filter(|d| !d.is_empty()) {
                    lines.push(description.to_string());
                }
            }
            Field::TransitionFeatures => {
                if let Some(tf) = expl.transition_features.as_ref().filter(|tf| !tf.is_empty()) {
                    lines.extend(transition_features_lines(tf));
                }
            }
            Field::Targets => {
                if !expl.targets().is_empty() {
                    lines.extend(targets_lines(expl, options, hl_spaces)?);
                }
            }
            Field::FeatureImportances => {
                if let Some(fi) = expl.feature_importances.as_ref().filter(|fi| !fi.is_empty()) {
                    lines.extend(feature_importances_lines(fi, hl_spaces));
                }
            }
            Field::DecisionTree => {
                if let Some(tree) = &expl.decision_tree {
                    lines.push(String::new());
                    lines.push(tree_to_text(tree));
                }
            }
        }
    }

    tracing::trace!(lines = lines.len(), "formatted explanation as text");
    Ok(lines.join("\n"))
}

fn transition_features_lines(tf: &TransitionFeatureWeights) -> Vec<String> {
    let mut headers = vec![String::new()];
    headers.extend(tf.class_names.iter().cloned());
    let rows = tf
        .class_names
        .iter()
        .zip(&tf.coef)
        .map(|(name, coefs)| {
            std::iter::once(Cell::from(name.as_str()))
                .chain(coefs.iter().map(|&c| Cell::Number(c)))
                .collect()
        })
        .collect();
    let table = Table {
        headers,
        rows,
        float_format: &|n: f64| format!("{n:.3}"),
    };

    let mut lines = vec![String::new(), "Transition features:".to_string()];
    lines.extend(table.render());
    lines.push(String::new());
    lines
}

fn targets_lines(
    expl: &Explanation,
    options: &TextOptions,
    hl_spaces: bool,
) -> Result<Vec<String>, RenderError> {
    let targets = expl.targets();
    let has_values = has_any_values_for_weights(expl);
    let prepared = prepare_weighted_spans(targets, options.preserve_density)?;
    let mut lines = Vec::new();

    for (target, target_spans) in targets.iter().zip(&prepared) {
        lines.push(target_header(target, expl.is_regression));
        if let Some(weights) = &target.feature_weights {
            let headers: Vec<String> = if has_values {
                vec!["Contribution".into(), "Feature".into(), "Value".into()]
            } else {
                vec!["Weight".into(), "Feature".into()]
            };
            let rows = weights
                .iter()
                .map(|fw| {
                    let mut row = vec![
                        Cell::Number(fw.weight),
                        Cell::Text(format_feature(&fw.feature, hl_spaces)),
                    ];
                    if has_values {
                        row.push(fw.value.into());
                    }
                    row
                })
                .collect();
            let table = Table {
                headers,
                rows,
                float_format: &|n: f64| format!("{n:+.3}"),
            };
            let rendered = table.render();
            // Header framed by separator lines on both sides.
            let mut framed = Vec::with_capacity(rendered.len() + 1);
            framed.push(rendered[1].clone());
            framed.extend(rendered);
            let width = display_width(&framed[0]);
            let split = framed.len() - weights.neg.len();

            lines.extend_from_slice(&framed[..split]);
            if let Some(n) = weights.pos_remaining.filter(|&n| n > 0) {
                lines.push(format_remaining(n, "positive", width));
            }
            if let Some(n) = weights.neg_remaining.filter(|&n| n > 0) {
                lines.push(format_remaining(n, "negative", width));
            }
            lines.extend_from_slice(&framed[split..]);
        }
        if let Some(docs) = target_spans {
            lines.extend(docs.iter().map(|pws| weighted_spans_line(pws, options.colorize_spans)));
        }
        lines.push(String::new());
    }
    Ok(lines)
}

fn target_header(target: &TargetExplanation, is_regression: bool) -> String {
    let mut scores = Vec::new();
    if let Some(proba) = target.proba {
        scores.push(format!("probability={proba:.3}"));
    }
    if let Some(score) = target.score {
        scores.push(format!("score={score:.3}"));
    }
    let scores = if scores.is_empty() {
        String::new()
    } else {
        format!(" ({})", scores.join(", "))
    };
    let prefix = if is_regression { "" } else { "y=" };
    format!("{prefix}{}{scores} top features", target.target)
}

fn feature_importances_lines(fi: &FeatureImportances, hl_spaces: bool) -> Vec<String> {
    let mut lines: Vec<String> = fi
        .importances
        .iter()
        .map(|fw| {
            let feature = format_feature(&fw.feature, hl_spaces);
            match fw.std {
                Some(std) => format!("{:.4} {PLUS_MINUS} {:.4}  {feature}", fw.weight, 2.0 * std),
                None => format!("{:.4}  {feature}", fw.weight),
            }
        })
        .collect();
    if let Some(n) = fi.remaining.filter(|&n| n > 0) {
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        lines.push(format_remaining(n, "", width));
    }
    lines
}

/// Centered `… N more <kind> …` placeholder for elided rows.
fn format_remaining(remaining: usize, kind: &str, width: usize) -> String {
    let kind = if kind.is_empty() {
        String::new()
    } else {
        format!("{kind} ")
    };
    center(&format!("{ELLIPSIS} {remaining} more {kind}{ELLIPSIS}"), width)
}

/// Document line for a highlighted target, optionally coloured by weight sign.
fn weighted_spans_line(pws: &PreparedWeightedSpans<'_>, colorize: bool) -> String {
    let prefix = pws
        .vec_name
        .map(|name| format!("{name}: "))
        .unwrap_or_default();
    if !colorize {
        return format!("{prefix}{}", pws.weighted_span.document);
    }

    let mut out = prefix;
    let mut current: Option<&'static str> = None;
    for (ch, weight) in pws.chars() {
        let code = ansi_code(weight, pws.weight_range);
        if code != current {
            if current.is_some() {
                out.push_str(ANSI_RESET);
            }
            if let Some(code) = code {
                out.push_str(code);
            }
            current = code;
        }
        out.push(ch);
    }
    if current.is_some() {
        out.push_str(ANSI_RESET);
    }
    out
}

const ANSI_RESET: &str = "\x1b[0m";

/// Relative weight from which highlighted text is shown bold.
const STRONG_WEIGHT: f64 = 0.5;

fn ansi_code(weight: f64, weight_range: f64) -> Option<&'static str> {
    if weight.abs() < 1e-8 {
        return None;
    }
    let strong = weight.abs() / weight_range >= STRONG_WEIGHT;
    Some(match (weight > 0.0, strong) {
        (true, true) => "\x1b[1;32m",
        (true, false) => "\x1b[32m",
        (false, true) => "\x1b[1;31m",
        (false, false) => "\x1b[31m",
    })
}

fn format_feature(name: &FeatureName, hl_spaces: bool) -> String {
    match name {
        FeatureName::Preformatted { formatted } => formatted.clone(),
        // Only the first candidate; the rest are elided.
        FeatureName::Hashed(candidates) => match candidates.split_first() {
            None => String::new(),
            Some((first, rest)) => {
                let shown = format_signed(first, |n| format_single_feature(n, hl_spaces));
                if rest.is_empty() {
                    shown
                } else {
                    format!("{shown} {ELLIPSIS}")
                }
            }
        },
        FeatureName::Plain(_) | FeatureName::Bytes(_) => {
            format_single_feature(&name.as_text().unwrap_or_default(), hl_spaces)
        }
    }
}

fn format_single_feature(feature: &str, hl_spaces: bool) -> String {
    if hl_spaces {
        replace_spaces(feature, |n, _| SPACE.repeat(n))
    } else {
        feature.to_string()
    }
}
