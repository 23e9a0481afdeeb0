//! HTML renderer.
//!
//! [`HtmlRenderer`] owns a handlebars registry with every template registered
//! up front; rendering only reads it, so one renderer can be shared between
//! threads. Colours and numbers are computed here and handed to the templates
//! as plain strings.

use handlebars::{Handlebars, html_escape};
use serde::Serialize;
use weightviz_core::color::{
    DEFAULT_MIN_LIGHTNESS, SPAN_MIN_LIGHTNESS, format_opacity, hue, remaining_weight_color_hsl,
    weight_color_hsl,
};
use weightviz_core::features::{
    SpaceSide, format_signed, has_any_values_for_weights, replace_spaces, should_highlight_spaces,
};
use weightviz_core::spans::{merge_weighted_spans_others, prepare_weighted_spans};
use weightviz_core::weights::{
    feature_importances_range, max_or_0, nonzero_range, others_weight_range,
    targets_weight_range,
};
use weightviz_core::{
    Explanation, FeatureImportances, FeatureName, FeatureWeight, FeatureWeights, Field,
    HtmlOptions, PreparedWeightedSpans, Sign, TargetExplanation, TransitionFeatureWeights,
};

use crate::error::RenderError;
use crate::templates::{
    DECISION_TREE, DESCRIPTION, EXPLAIN, METHOD, STYLES, TARGETS_HORIZONTAL, TARGETS_VERTICAL,
    TEMPLATES, TRANSITION_FEATURES, WEIGHTS_TABLE,
};
use crate::tree::tree_to_text;

const CONTRIBUTION_TITLE: &str = "Feature contribution already accounts for the feature value \
     (for linear models, contribution = weight * feature value), and the sum of feature \
     contributions is equal to the score or, for some classifiers, to the probability.";

/// Renders explanations as HTML fragments.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    /// Create a renderer with all templates registered.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        for (name, template) in TEMPLATES {
            registry
                .register_template_string(name, template)
                .map_err(Box::new)?;
        }
        tracing::debug!(templates = TEMPLATES.len(), "registered html templates");
        Ok(Self { registry })
    }

    /// The shared CSS block.
    ///
    /// Callers embedding several explanations in one page can render them
    /// without styles and include this block once.
    pub fn styles(&self) -> Result<String, RenderError> {
        Ok(self.registry.render(STYLES, &())?)
    }

    /// Render an explanation.
    ///
    /// The error, if any, comes first; then every field of `options.show`
    /// that is present on the explanation, in order.
    pub fn render(&self, expl: &Explanation, options: &HtmlOptions) -> Result<String, RenderError> {
        let hl_spaces = options
            .highlight_spaces
            .unwrap_or_else(|| should_highlight_spaces(expl));
        let mut blocks = Vec::new();

        for field in &options.show {
            match field {
                Field::Method => {
                    if let Some(method) = expl.method.as_deref().filter(|m| !m.is_empty()) {
                        blocks.push(self.registry.render(METHOD, &MethodContext { method })?);
                    }
                }
                Field::Description => {
                    if let Some(description) =
                        expl.description.as_deref().filter(|d| !d.is_empty())
                    {
                        blocks.push(
                            self.registry
                                .render(DESCRIPTION, &DescriptionContext { description })?,
                        );
                    }
                }
                Field::TransitionFeatures => {
                    if let Some(tf) = expl.transition_features.as_ref().filter(|tf| !tf.is_empty())
                    {
                        blocks.push(self.transition_features(tf)?);
                    }
                }
                Field::Targets => {
                    if !expl.targets().is_empty() {
                        blocks.push(self.targets(expl, options, hl_spaces)?);
                    }
                }
                Field::FeatureImportances => {
                    if let Some(fi) = expl.feature_importances.as_ref().filter(|fi| !fi.is_empty())
                    {
                        blocks.push(self.feature_importances(fi, hl_spaces)?);
                    }
                }
                Field::DecisionTree => {
                    if let Some(tree) = &expl.decision_tree {
                        let tree = tree_to_text(tree);
                        blocks.push(self.registry.render(DECISION_TREE, &TreeContext { tree })?);
                    }
                }
            }
        }

        let styles = if options.include_styles {
            self.styles()?
        } else {
            String::new()
        };
        let html = self.registry.render(
            EXPLAIN,
            &ExplainContext {
                styles,
                error: expl.error.as_deref(),
                blocks,
            },
        )?;
        tracing::trace!(bytes = html.len(), "rendered explanation as html");
        Ok(html)
    }

    fn targets(
        &self,
        expl: &Explanation,
        options: &HtmlOptions,
        hl_spaces: bool,
    ) -> Result<String, RenderError> {
        let targets = expl.targets();
        let prepared = prepare_weighted_spans(targets, options.preserve_density)?;
        let others: Vec<Option<FeatureWeights>> =
            targets.iter().map(merge_weighted_spans_others).collect();
        let weight_range = targets_weight_range(targets);
        let other_range = others_weight_range(&others);
        let has_values = has_any_values_for_weights(expl);
        let others_have_values = others
            .iter()
            .flatten()
            .flat_map(|o| o.iter())
            .any(|fw| fw.value.is_some());

        let mut views = Vec::with_capacity(targets.len());
        for ((target, spans), other) in targets.iter().zip(&prepared).zip(&others) {
            let weights = if !options.force_weights && target.has_weighted_spans() {
                other.as_ref().map(|o| (o, other_range, others_have_values))
            } else {
                target
                    .feature_weights
                    .as_ref()
                    .map(|fw| (fw, weight_range, has_values))
            };
            let table = match weights {
                Some((weights, range, with_values)) => {
                    self.weights_table(weights, range, with_values, hl_spaces)?
                }
                None => String::new(),
            };
            views.push(TargetView {
                header: target_header(target, expl.is_regression),
                table,
                spans: spans.as_deref().map(render_weighted_spans),
            });
        }

        let template = if options.horizontal_layout && views.len() > 1 {
            TARGETS_HORIZONTAL
        } else {
            TARGETS_VERTICAL
        };
        Ok(self
            .registry
            .render(template, &TargetsContext { targets: views })?)
    }

    fn weights_table(
        &self,
        weights: &FeatureWeights,
        weight_range: f64,
        with_values: bool,
        hl_spaces: bool,
    ) -> Result<String, RenderError> {
        let range = nonzero_range(weight_range);
        let colspan = if with_values { 3 } else { 2 };
        let headers = if with_values {
            vec![
                Header::new("Contribution", "right").with_title(CONTRIBUTION_TITLE),
                Header::new("Feature", "left"),
                Header::new("Value", "right"),
            ]
        } else {
            vec![Header::new("Weight", "right"), Header::new("Feature", "left")]
        };

        let mut rows: Vec<Row> = weights
            .pos
            .iter()
            .map(|fw| Row::weight(fw, range, with_values, hl_spaces))
            .collect();
        if let Some(n) = weights.pos_remaining.filter(|&n| n > 0) {
            let color = remaining_weight_color_hsl(&weights.pos, weight_range, Sign::Positive);
            rows.push(Row::remaining(n, "positive ", color.to_string(), colspan));
        }
        if let Some(n) = weights.neg_remaining.filter(|&n| n > 0) {
            let color = remaining_weight_color_hsl(&weights.neg, weight_range, Sign::Negative);
            rows.push(Row::remaining(n, "negative ", color.to_string(), colspan));
        }
        rows.extend(
            weights
                .neg
                .iter()
                .map(|fw| Row::weight(fw, range, with_values, hl_spaces)),
        );

        Ok(self
            .registry
            .render(WEIGHTS_TABLE, &WeightsTableContext { headers, rows })?)
    }

    fn feature_importances(
        &self,
        fi: &FeatureImportances,
        hl_spaces: bool,
    ) -> Result<String, RenderError> {
        let weight_range = feature_importances_range(Some(fi));
        let range = nonzero_range(weight_range);
        let headers = vec![Header::new("Weight", "right"), Header::new("Feature", "left")];
        let mut rows: Vec<Row> = fi
            .importances
            .iter()
            .map(|fw| Row::importance(fw, range, hl_spaces))
            .collect();
        if let Some(n) = fi.remaining.filter(|&n| n > 0) {
            let color = remaining_weight_color_hsl(&fi.importances, weight_range, Sign::Positive);
            rows.push(Row::remaining(n, "", color.to_string(), 2));
        }
        Ok(self
            .registry
            .render(WEIGHTS_TABLE, &WeightsTableContext { headers, rows })?)
    }

    fn transition_features(&self, tf: &TransitionFeatureWeights) -> Result<String, RenderError> {
        let range = nonzero_range(max_or_0(tf.coef.iter().flatten().copied()));
        let rows = tf
            .class_names
            .iter()
            .zip(&tf.coef)
            .map(|(from, coefs)| TransitionRow {
                name: from,
                cells: tf
                    .class_names
                    .iter()
                    .zip(coefs)
                    .map(|(to, &coef)| TransitionCell {
                        color: weight_color_hsl(coef, range, DEFAULT_MIN_LIGHTNESS).to_string(),
                        title: format!("{from} ⇒ {to}"),
                        value: format!("{coef:.3}"),
                    })
                    .collect(),
            })
            .collect();
        Ok(self.registry.render(
            TRANSITION_FEATURES,
            &TransitionContext {
                class_names: &tf.class_names,
                rows,
            },
        )?)
    }
}

#[derive(Serialize)]
struct ExplainContext<'a> {
    styles: String,
    error: Option<&'a str>,
    blocks: Vec<String>,
}

#[derive(Serialize)]
struct MethodContext<'a> {
    method: &'a str,
}

#[derive(Serialize)]
struct DescriptionContext<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct TreeContext {
    tree: String,
}

#[derive(Serialize)]
struct TargetsContext {
    targets: Vec<TargetView>,
}

/// One target; every field is pre-rendered markup.
#[derive(Serialize)]
struct TargetView {
    header: String,
    table: String,
    spans: Option<String>,
}

#[derive(Serialize)]
struct WeightsTableContext {
    headers: Vec<Header>,
    rows: Vec<Row>,
}

#[derive(Serialize)]
struct Header {
    label: &'static str,
    align: &'static str,
    title: &'static str,
}

impl Header {
    fn new(label: &'static str, align: &'static str) -> Self {
        Self {
            label,
            align,
            title: "",
        }
    }

    fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }
}

#[derive(Serialize, Default)]
struct Row {
    color: String,
    is_remaining: bool,
    // weight rows
    weight: String,
    feature: String,
    has_value: bool,
    value: String,
    // remaining rows
    remaining: usize,
    kind: &'static str,
    colspan: usize,
}

impl Row {
    fn weight(fw: &FeatureWeight, range: f64, with_value: bool, hl_spaces: bool) -> Self {
        let weight = match fw.std {
            Some(std) => format!("{:+.3} ± {:.3}", fw.weight, 2.0 * std),
            None => format!("{:+.3}", fw.weight),
        };
        Self {
            color: weight_color_hsl(fw.weight, range, DEFAULT_MIN_LIGHTNESS).to_string(),
            weight,
            feature: format_feature(&fw.feature, fw.weight, hl_spaces),
            has_value: with_value,
            value: fw.value.map(|v| format!("{v:.3}")).unwrap_or_default(),
            ..Self::default()
        }
    }

    fn importance(fw: &FeatureWeight, range: f64, hl_spaces: bool) -> Self {
        let weight = match fw.std {
            Some(std) => format!("{:.4} ± {:.4}", fw.weight, 2.0 * std),
            None => format!("{:.4}", fw.weight),
        };
        Self {
            color: weight_color_hsl(fw.weight, range, DEFAULT_MIN_LIGHTNESS).to_string(),
            weight,
            feature: format_feature(&fw.feature, fw.weight, hl_spaces),
            ..Self::default()
        }
    }

    fn remaining(remaining: usize, kind: &'static str, color: String, colspan: usize) -> Self {
        Self {
            color,
            is_remaining: true,
            remaining,
            kind,
            colspan,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct TransitionContext<'a> {
    class_names: &'a [String],
    rows: Vec<TransitionRow<'a>>,
}

#[derive(Serialize)]
struct TransitionRow<'a> {
    name: &'a str,
    cells: Vec<TransitionCell>,
}

#[derive(Serialize)]
struct TransitionCell {
    color: String,
    title: String,
    value: String,
}

fn target_header(target: &TargetExplanation, is_regression: bool) -> String {
    let mut scores = Vec::new();
    if let Some(proba) = target.proba {
        scores.push(format!("probability <b>{proba:.3}</b>"));
    }
    if let Some(score) = target.score {
        scores.push(format!("score <b>{score:.3}</b>"));
    }
    let scores = if scores.is_empty() {
        String::new()
    } else {
        format!(" ({})", scores.join(", "))
    };
    let prefix = if is_regression { "" } else { "y=" };
    let label = html_escape(&target.target.to_string());
    format!("<b>{prefix}{label}</b>{scores} top features")
}

/// Highlighted documents joined by line breaks.
fn render_weighted_spans(docs: &[PreparedWeightedSpans<'_>]) -> String {
    docs.iter()
        .map(|pws| {
            let mut out = pws
                .vec_name
                .map(|name| format!("<b>{}:</b> ", html_escape(name)))
                .unwrap_or_default();
            let mut run = String::new();
            let mut run_weight: Option<f64> = None;
            for (ch, weight) in pws.chars() {
                if let Some(w) = run_weight.filter(|&w| w != weight) {
                    out.push_str(&colorize(&run, w, pws.weight_range));
                    run.clear();
                }
                run_weight = Some(weight);
                run.push(ch);
            }
            if let Some(w) = run_weight {
                out.push_str(&colorize(&run, w, pws.weight_range));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("<br/>")
}

/// A run of document text sharing one weight.
fn colorize(token: &str, weight: f64, weight_range: f64) -> String {
    let token = html_escape(token);
    let opacity = format_opacity(weight, weight_range);
    if weight.abs() < 1e-8 {
        return format!(r#"<span style="opacity: {opacity}">{token}</span>"#);
    }
    let color = weight_color_hsl(weight, weight_range, SPAN_MIN_LIGHTNESS);
    format!(
        r#"<span style="background-color: {color}; opacity: {opacity}" title="{weight:.3}">{token}</span>"#
    )
}

fn format_feature(name: &FeatureName, weight: f64, hl_spaces: bool) -> String {
    match name {
        FeatureName::Preformatted { formatted } => html_escape(formatted),
        FeatureName::Hashed(candidates) => match candidates.split_first() {
            None => String::new(),
            Some((first, rest)) => {
                let shown = format_signed(first, |n| format_single_feature(n, weight, hl_spaces));
                if rest.is_empty() {
                    return shown;
                }
                let title = rest
                    .iter()
                    .map(|c| format_signed(c, |n| n.to_string()))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    r#"{shown} <span title="{}">&hellip;</span>"#,
                    html_escape(&title)
                )
            }
        },
        FeatureName::Plain(_) | FeatureName::Bytes(_) => {
            format_single_feature(&name.as_text().unwrap_or_default(), weight, hl_spaces)
        }
    }
}

fn format_single_feature(feature: &str, weight: f64, hl_spaces: bool) -> String {
    let escaped = html_escape(feature);
    if !hl_spaces {
        return escaped;
    }
    let space_hue = hue(weight);
    replace_spaces(&escaped, |n, side| {
        // Leading spaces get a gap after them, trailing ones before.
        let (after, before) = match side {
            SpaceSide::Left => ("0.1em", "0"),
            SpaceSide::Right => ("0", "0.1em"),
            SpaceSide::Center => ("0.1em", "0.1em"),
        };
        let title = if n == 1 {
            "A space symbol".to_string()
        } else {
            format!("{n} space symbols")
        };
        format!(
            r#"<span style="background-color: hsl({space_hue}, 80%, 70%); margin: 0 {after} 0 {before}" title="{title}">{}</span>"#,
            "&emsp;".repeat(n)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weightviz_core::{HashedCandidate, SpanEntry, WeightedSpan, WeightedSpans};

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new().unwrap()
    }

    fn options(show: &[Field]) -> HtmlOptions {
        HtmlOptions {
            show: show.to_vec(),
            include_styles: false,
            ..HtmlOptions::default()
        }
    }

    fn target(label: &str, feature: &str, weight: f64) -> TargetExplanation {
        TargetExplanation::new(label).with_feature_weights(FeatureWeights::new(
            vec![FeatureWeight::new(feature, weight)],
            vec![],
        ))
    }

    fn highlighted(label: &str) -> TargetExplanation {
        TargetExplanation::new(label).with_weighted_spans(vec![
            WeightedSpans::new(vec![WeightedSpan::new(
                "char",
                "good bad",
                vec![
                    SpanEntry::new("good", vec![(0, 4)], 2.0),
                    SpanEntry::new("bad", vec![(5, 8)], -0.2),
                ],
            )])
            .with_vec_name("body")
            .with_other(FeatureWeights::new(
                vec![FeatureWeight::new("<BIAS>", 0.5)],
                vec![],
            )),
        ])
    }

    #[test]
    fn test_styles_block() {
        let r = renderer();
        let styles = r.styles().unwrap();
        assert!(styles.contains("table.weightviz-weights tr:hover"));
        assert_eq!(styles, r.styles().unwrap());
    }

    #[test]
    fn test_include_styles() {
        let r = renderer();
        let expl = Explanation {
            method: Some("linear model".into()),
            ..Default::default()
        };
        let with = r.render(&expl, &HtmlOptions::default()).unwrap();
        assert!(with.starts_with(&r.styles().unwrap()));
        let without = r.render(&expl, &options(&[Field::Method])).unwrap();
        assert!(!without.contains("<style>"));
    }

    #[test]
    fn test_error_comes_first() {
        let expl = Explanation {
            method: Some("CRF".into()),
            error: Some("estimator <X> not supported".into()),
            ..Default::default()
        };
        let html = renderer().render(&expl, &options(&[Field::Method])).unwrap();
        assert_eq!(
            html,
            "<p style=\"color: red; font-weight: bold;\">Error: estimator &lt;X&gt; not supported</p>\n\
             <p style=\"margin-bottom: 0.5em; margin-top: 0em;\">Explained as: CRF</p>\n"
        );
    }

    #[test]
    fn test_weight_rows_are_coloured_and_escaped() {
        let expl = Explanation {
            targets: Some(vec![target("a", "<b>", 2.0)]),
            ..Default::default()
        };
        let html = renderer().render(&expl, &options(&[Field::Targets])).unwrap();
        assert!(html.contains("<b>y=&#x27;a&#x27;</b> top features"));
        assert!(html.contains("background-color: hsl(120, 100.00%, 80.00%)"));
        assert!(html.contains(">+2.000</td>"));
        assert!(html.contains(">&lt;b&gt;</td>"));
    }

    #[test]
    fn test_layout_follows_target_count() {
        let r = renderer();
        let one = Explanation {
            targets: Some(vec![target("a", "x", 1.0)]),
            ..Default::default()
        };
        let two = Explanation {
            targets: Some(vec![target("a", "x", 1.0), target("b", "x", -1.0)]),
            ..Default::default()
        };
        let opts = options(&[Field::Targets]);
        assert!(!r.render(&one, &opts).unwrap().contains("1px solid black"));
        assert!(r.render(&two, &opts).unwrap().contains("1px solid black"));

        let vertical = HtmlOptions {
            horizontal_layout: false,
            ..opts
        };
        assert!(!r.render(&two, &vertical).unwrap().contains("1px solid black"));
    }

    #[test]
    fn test_remaining_rows() {
        let expl = Explanation {
            targets: Some(vec![TargetExplanation::new("a").with_feature_weights(
                FeatureWeights {
                    pos: vec![FeatureWeight::new("x", 1.0)],
                    neg: vec![FeatureWeight::new("y", -0.5)],
                    pos_remaining: Some(4),
                    neg_remaining: Some(2),
                },
            )]),
            ..Default::default()
        };
        let html = renderer().render(&expl, &options(&[Field::Targets])).unwrap();
        let pos = html.find("&hellip; 4 more positive &hellip;").unwrap();
        let neg = html.find("&hellip; 2 more negative &hellip;").unwrap();
        let y = html.find(">y</td>").unwrap();
        assert!(pos < neg && neg < y);
    }

    #[test]
    fn test_highlighted_document() {
        let expl = Explanation {
            targets: Some(vec![highlighted("y")]),
            ..Default::default()
        };
        let html = renderer().render(&expl, &options(&[Field::Targets])).unwrap();
        assert!(html.contains(
            "<b>body:</b> <span style=\"background-color: hsl(120, 100.00%, 60.00%); \
             opacity: 1.00\" title=\"2.000\">good</span><span style=\"opacity: 0.80\"> </span>"
        ));
    }

    #[test]
    fn test_force_weights_off_shows_other_weights() {
        let mut t = highlighted("y");
        t.feature_weights = Some(FeatureWeights::new(
            vec![FeatureWeight::new("good", 2.0)],
            vec![],
        ));
        let expl = Explanation {
            targets: Some(vec![t]),
            ..Default::default()
        };
        let r = renderer();

        let forced = r.render(&expl, &options(&[Field::Targets])).unwrap();
        assert!(forced.contains(">good</td>"));
        assert!(!forced.contains("&lt;BIAS&gt;"));

        let opts = HtmlOptions {
            force_weights: false,
            ..options(&[Field::Targets])
        };
        let other = r.render(&expl, &opts).unwrap();
        assert!(other.contains(">&lt;BIAS&gt;</td>"));
        assert!(!other.contains(">good</td>"));
    }

    #[test]
    fn test_transition_features() {
        let expl = Explanation {
            transition_features: Some(TransitionFeatureWeights {
                class_names: vec!["rainy".into(), "sunny".into()],
                coef: vec![vec![2.455, -0.13], vec![-0.13, 0.696]],
            }),
            ..Default::default()
        };
        let html = renderer()
            .render(&expl, &options(&[Field::TransitionFeatures]))
            .unwrap();
        assert!(html.contains("From &#92; To"));
        assert!(html.contains(
            "<th style=\"padding: 0 0.5em 0 0.5em; text-align: right; border: none;\">rainy</th>\
             <th style=\"padding: 0 0.5em 0 0.5em; text-align: right; border: none;\">sunny</th>"
        ));
        assert!(html.contains("title=\"rainy ⇒ sunny\">-0.130</td>"));
    }

    #[test]
    fn test_feature_importances_table() {
        let expl = Explanation {
            feature_importances: Some(FeatureImportances {
                importances: vec![FeatureWeight::new("petal", 0.75).with_std(0.01)],
                remaining: Some(3),
            }),
            ..Default::default()
        };
        let html = renderer()
            .render(&expl, &options(&[Field::FeatureImportances]))
            .unwrap();
        assert!(html.contains(">0.7500 ± 0.0200</td>"));
        assert!(!html.contains("+0.750"));
        assert!(html.contains("&hellip; 3 more &hellip;"));
    }

    #[test]
    fn test_hashed_feature_title() {
        let name = FeatureName::Hashed(vec![
            HashedCandidate { name: "good".into(), sign: 1.0 },
            HashedCandidate { name: "bad".into(), sign: -1.0 },
        ]);
        assert_eq!(
            format_feature(&name, 1.0, false),
            r#"good <span title="(-)bad">&hellip;</span>"#
        );
    }

    #[test]
    fn test_space_highlighting() {
        assert_eq!(
            format_feature(&FeatureName::from(" x"), -1.0, true),
            r#"<span style="background-color: hsl(0, 80%, 70%); margin: 0 0.1em 0 0" title="A space symbol">&emsp;</span>x"#
        );
        assert!(format_feature(&FeatureName::from("a  b"), 1.0, true)
            .contains(r#"title="2 space symbols">&emsp;&emsp;</span>"#));
    }

    #[test]
    fn test_space_hue_follows_weight_sign() {
        // Zero weight is not positive.
        assert!(format_feature(&FeatureName::from(" x"), 0.0, true)
            .starts_with(r#"<span style="background-color: hsl(0, 80%, 70%);"#));
        assert!(format_feature(&FeatureName::from(" x"), 0.5, true)
            .starts_with(r#"<span style="background-color: hsl(120, 80%, 70%);"#));

        // The row weight decides, not the candidate sign.
        let hashed = FeatureName::Hashed(vec![HashedCandidate { name: " x".into(), sign: -1.0 }]);
        let html = format_feature(&hashed, 2.0, true);
        assert!(html.starts_with(r#"(-)<span style="background-color: hsl(120, 80%, 70%);"#));
    }

    #[test]
    fn test_decision_tree_is_preformatted() {
        let expl = Explanation {
            decision_tree: Some(weightviz_core::TreeInfo {
                criterion: "gini".into(),
                tree: weightviz_core::NodeInfo {
                    id: 0,
                    is_leaf: true,
                    value: vec![0.25, 0.75],
                    value_ratio: vec![0.25, 0.75],
                    sample_ratio: 1.0,
                    threshold: None,
                    feature_name: None,
                    left: None,
                    right: None,
                },
                graphviz: None,
                is_classification: true,
            }),
            ..Default::default()
        };
        let html = renderer()
            .render(&expl, &options(&[Field::DecisionTree]))
            .unwrap();
        assert_eq!(html, "<pre style=\"margin-bottom: 1em;\">  ---&gt; 0.750</pre>\n");
    }

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HtmlRenderer>();
    }
}
