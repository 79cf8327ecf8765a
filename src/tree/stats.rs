//! Statistics aggregation over a tree
//!
//! A single depth-first walk producing counts, sizes, depth, and a file
//! type histogram for display next to the rendered tree.

use std::collections::HashMap;

use serde::Serialize;

use crate::tree::TreeNode;

/// Histogram key for files whose name contains no `.`.
/// Distinct from the empty string, which a name like `"name."` yields.
pub const NO_EXTENSION_KEY: &str = "no-extension";

/// Derived, immutable summary of one tree snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Total number of file nodes.
    pub total_files: usize,
    /// Total number of folder nodes, the root included.
    pub total_folders: usize,
    /// Sum of known file sizes in bytes; files without a reported size
    /// contribute 0.
    pub total_size: u64,
    /// Depth of the deepest visited node; the root sits at depth 0.
    pub max_depth: usize,
    /// Lowercase file extension (or [`NO_EXTENSION_KEY`]) → occurrence count.
    pub file_types: HashMap<String, usize>,
}

/// Walk the tree once and aggregate its statistics.
///
/// An absent root yields the zero-valued summary rather than an error.
pub fn compute_stats(root: Option<&TreeNode>) -> StatsSummary {
    let mut summary = StatsSummary::default();
    if let Some(root) = root {
        visit(root, 0, &mut summary);
    }
    summary
}

fn visit(node: &TreeNode, depth: usize, summary: &mut StatsSummary) {
    summary.max_depth = summary.max_depth.max(depth);
    match node {
        TreeNode::File { name, size, .. } => {
            summary.total_files += 1;
            summary.total_size += size.unwrap_or(0);
            *summary.file_types.entry(extension_key(name)).or_insert(0) += 1;
        }
        TreeNode::Folder { children, .. } => {
            summary.total_folders += 1;
            for child in children {
                visit(child, depth + 1, summary);
            }
        }
    }
}

/// Histogram key for a file name: the segment after the last `.`,
/// lowercased, or the sentinel when the name has no `.` at all.
pub(crate) fn extension_key(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => NO_EXTENSION_KEY.to_string(),
    }
}
