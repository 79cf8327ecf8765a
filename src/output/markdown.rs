//! Markdown outline output
//!
//! Renders the tree as a nested markdown list, suitable for pasting into
//! documentation: the root becomes a level-1 heading, folders bold
//! bulleted labels, files inline-code bulleted entries.

use crate::tree::TreeNode;

/// Render the tree as a markdown outline. Indentation is two spaces per
/// depth level below the root's children.
pub fn format_markdown(root: Option<&TreeNode>) -> String {
    let Some(root) = root else {
        return String::new();
    };
    let mut output = String::new();
    output.push_str("# ");
    output.push_str(root.name());
    output.push_str("\n\n");
    for child in root.children() {
        format_node(child, &mut output, 0);
    }
    output
}

fn format_node(node: &TreeNode, output: &mut String, depth: usize) {
    for _ in 0..depth {
        output.push_str("  ");
    }
    match node {
        TreeNode::Folder { name, children, .. } => {
            output.push_str("- **");
            output.push_str(name);
            output.push_str("/**\n");
            for child in children {
                format_node(child, output, depth + 1);
            }
        }
        TreeNode::File { name, .. } => {
            output.push_str("- `");
            output.push_str(name);
            output.push_str("`\n");
        }
    }
}
