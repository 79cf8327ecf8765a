//! Indented ASCII tree output
//!
//! The classic `tree`-style rendering: the root name on its own line,
//! every descendant behind `├── `/`└── ` connectors with `│   ` and
//! `    ` continuation prefixes accumulated from its ancestors.

use crate::tree::TreeNode;

/// Render the tree as indented text. One line per node, so the number of
/// non-blank lines always equals the node count.
pub fn format_text(root: Option<&TreeNode>) -> String {
    let Some(root) = root else {
        return String::new();
    };
    let mut output = String::new();
    // Root is never prefixed
    output.push_str(root.name());
    output.push('\n');
    let children = root.children();
    for (i, child) in children.iter().enumerate() {
        format_node(child, &mut output, "", i == children.len() - 1);
    }
    output
}

fn format_node(node: &TreeNode, output: &mut String, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(node.name());
    output.push('\n');

    let new_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        format_node(child, output, &new_prefix, i == children.len() - 1);
    }
}
