//! Handlebars templates of the HTML renderer.
//!
//! Templates only lay out precomputed values: colours, formatted numbers and
//! pre-escaped feature markup (inserted with triple braces) are built in Rust.

pub const STYLES: &str = "styles";
pub const EXPLAIN: &str = "explain";
pub const WEIGHTS_TABLE: &str = "weights_table";
pub const TARGETS_VERTICAL: &str = "targets_vertical";
pub const TARGETS_HORIZONTAL: &str = "targets_horizontal";
pub const TRANSITION_FEATURES: &str = "transition_features";
pub const DECISION_TREE: &str = "decision_tree";
pub const METHOD: &str = "method";
pub const DESCRIPTION: &str = "description";

/// All templates, registered once by [`crate::html::HtmlRenderer::new`].
pub const TEMPLATES: &[(&str, &str)] = &[
    (STYLES, STYLES_TPL),
    (EXPLAIN, EXPLAIN_TPL),
    (WEIGHTS_TABLE, WEIGHTS_TABLE_TPL),
    (TARGETS_VERTICAL, TARGETS_VERTICAL_TPL),
    (TARGETS_HORIZONTAL, TARGETS_HORIZONTAL_TPL),
    (TRANSITION_FEATURES, TRANSITION_FEATURES_TPL),
    (DECISION_TREE, DECISION_TREE_TPL),
    (METHOD, METHOD_TPL),
    (DESCRIPTION, DESCRIPTION_TPL),
];

const STYLES_TPL: &str = r#"<style>
    table.weightviz-weights tr:hover {
        filter: brightness(85%);
    }
    table.weightviz-transition-features td:hover {
        filter: brightness(85%);
    }
</style>
"#;

const EXPLAIN_TPL: &str = r#"{{{styles}}}{{#if error}}<p style="color: red; font-weight: bold;">Error: {{error}}</p>
{{/if}}{{#each blocks}}{{{this}}}{{/each}}"#;

const METHOD_TPL: &str = r#"<p style="margin-bottom: 0.5em; margin-top: 0em;">Explained as: {{method}}</p>
"#;

const DESCRIPTION_TPL: &str = r#"<pre style="margin-bottom: 1em;">{{description}}</pre>
"#;

const WEIGHTS_TABLE_TPL: &str = r#"<table class="weightviz-weights" style="border-collapse: collapse; border: none; margin-top: 0em; table-layout: auto;">
<thead>
<tr style="border: none;">{{#each headers}}<th style="padding: 0 1em 0 0.5em; text-align: {{align}}; border: none;" title="{{title}}">{{label}}</th>{{/each}}</tr>
</thead>
<tbody>
{{#each rows}}{{#if is_remaining}}<tr style="background-color: {{color}}; border: none;"><td colspan="{{colspan}}" style="padding: 0 0.5em 0 0.5em; text-align: center; border: none; white-space: nowrap;"><i>&hellip; {{remaining}} more {{kind}}&hellip;</i></td></tr>
{{else}}<tr style="background-color: {{color}}; border: none;"><td style="padding: 0 1em 0 0.5em; text-align: right; border: none;">{{weight}}</td><td style="padding: 0 0.5em 0 0.5em; text-align: left; border: none;">{{{feature}}}</td>{{#if has_value}}<td style="padding: 0 0.5em 0 1em; text-align: right; border: none;">{{value}}</td>{{/if}}</tr>
{{/if}}{{/each}}</tbody>
</table>
"#;

const TARGETS_VERTICAL_TPL: &str = r#"{{#each targets}}<p style="margin-bottom: 0.5em; margin-top: 0em;">{{{header}}}</p>
{{{table}}}{{#if spans}}<p style="margin-bottom: 2.5em; margin-top: 0.5em;">{{{spans}}}</p>
{{/if}}{{/each}}"#;

const TARGETS_HORIZONTAL_TPL: &str = r#"<table style="border-collapse: collapse; border: none;">
<tr style="border: none;">{{#each targets}}<td style="padding: 0.5em; border: 1px solid black; text-align: center;">{{{header}}}</td>{{/each}}</tr>
<tr style="border: none;">{{#each targets}}<td style="padding: 0px; border: 1px solid black; vertical-align: top;">{{{table}}}{{#if spans}}<p style="margin: 0.5em;">{{{spans}}}</p>{{/if}}</td>{{/each}}</tr>
</table>
"#;

const TRANSITION_FEATURES_TPL: &str = r#"<table class="weightviz-transition-features" style="border-collapse: collapse; border: none; margin-bottom: 1em;">
<thead>
<tr style="border: none;"><th style="padding: 0 0.5em 0 0.5em; text-align: center; border: none;">From &#92; To</th>{{#each class_names}}<th style="padding: 0 0.5em 0 0.5em; text-align: right; border: none;">{{this}}</th>{{/each}}</tr>
</thead>
<tbody>
{{#each rows}}<tr style="border: none;"><th style="padding: 0 0.5em 0 0.5em; text-align: left; border: none;">{{name}}</th>{{#each cells}}<td style="background-color: {{color}}; padding: 0 0.5em 0 0.5em; text-align: right; border: none;" title="{{title}}">{{value}}</td>{{/each}}</tr>
{{/each}}</tbody>
</table>
"#;

const DECISION_TREE_TPL: &str = r#"<pre style="margin-bottom: 1em;">{{tree}}</pre>
"#;
