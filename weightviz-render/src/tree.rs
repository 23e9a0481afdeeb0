//! Decision tree as indented text.

use weightviz_core::{NodeInfo, TreeInfo};

const INDENT: usize = 4;

/// Render a decision tree: one line per branch condition, leaves as `---> value`.
pub fn tree_to_text(tree: &TreeInfo) -> String {
    let mut out = String::new();
    format_node(tree, &tree.tree, 0, &mut out);
    out
}

fn format_node(tree: &TreeInfo, node: &NodeInfo, depth: usize, out: &mut String) {
    let (left, right) = match (&node.left, &node.right) {
        (Some(left), Some(right)) if !node.is_leaf => (left, right),
        _ => {
            out.push_str("  ---> ");
            out.push_str(&leaf_value(tree, node));
            return;
        }
    };

    let feature = node.feature_name.as_deref().unwrap_or("?");
    let threshold = node.threshold.unwrap_or(0.0);
    let pad = " ".repeat(depth * INDENT);
    if depth > 0 {
        out.push('\n');
    }
    out.push_str(&format!(
        "{pad}{feature} <= {threshold:.3}  ({:.1}%)",
        left.sample_ratio * 100.0
    ));
    format_node(tree, left, depth + 1, out);
    out.push('\n');
    out.push_str(&format!(
        "{pad}{feature} > {threshold:.3}  ({:.1}%)",
        right.sample_ratio * 100.0
    ));
    format_node(tree, right, depth + 1, out);
}

fn leaf_value(tree: &TreeInfo, node: &NodeInfo) -> String {
    let values = if tree.is_classification {
        match node.value_ratio.as_slice() {
            // Binary classification: probability of the positive class.
            [_, positive] => return format!("{positive:.3}"),
            ratios => ratios,
        }
    } else {
        node.value.as_slice()
    };
    match values {
        [single] => format!("{single:.3}"),
        many => format!(
            "[{}]",
            many.iter()
                .map(|v| format!("{v:.3}"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
