//! Filter/search over a tree
//!
//! Produces a new tree containing only nodes matching a predicate while
//! preserving the ancestor folders of every match. The input tree is
//! never mutated; result trees are freshly built.

use std::collections::HashSet;

use super::stats::extension_key;
use crate::tree::TreeNode;

/// Predicate over node names and file extensions.
///
/// Both criteria are optional-by-emptiness: an empty search string
/// matches every name and an empty allow-set matches every extension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMatch {
    /// Case-insensitive substring the node name must contain.
    pub name_contains: String,
    /// Lowercase extension allow-set; applies to files only.
    pub extensions: HashSet<String>,
}

impl NodeMatch {
    /// Build a predicate, normalizing both criteria to lowercase.
    pub fn new<I, S>(name_contains: &str, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name_contains: name_contains.to_lowercase(),
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Match nodes whose name contains `needle`, any extension.
    pub fn name(needle: &str) -> Self {
        Self::new(needle, std::iter::empty::<&str>())
    }

    /// True when neither criterion is active.
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_empty() && self.extensions.is_empty()
    }

    fn name_matches(&self, name: &str) -> bool {
        self.name_contains.is_empty() || name.to_lowercase().contains(&self.name_contains)
    }

    fn extension_matches(&self, name: &str) -> bool {
        self.extensions.is_empty() || self.extensions.contains(&extension_key(name))
    }

    /// A file must satisfy both the name and the extension criterion.
    fn file_matches(&self, name: &str) -> bool {
        self.name_matches(name) && self.extension_matches(name)
    }

    /// A folder survives on its own name only when a name criterion is
    /// actually active; the extension filter never applies to folders.
    fn folder_name_matches(&self, name: &str) -> bool {
        !self.name_contains.is_empty() && self.name_matches(name)
    }
}

/// Return a new tree holding only nodes matching `pred`, with the
/// ancestor folders of every match preserved.
///
/// The root represents the repository itself: it is never a match target
/// and is kept exactly when at least one descendant survives. An empty
/// predicate short-circuits to a structural clone of the input. This is
/// the documented identity policy, not merely an optimization, because
/// the recursive path drops folders that end up with no surviving
/// children (including folders that were empty to begin with).
pub fn filter_tree(root: Option<&TreeNode>, pred: &NodeMatch) -> Option<TreeNode> {
    let root = root?;
    if pred.is_empty() {
        return Some(root.clone());
    }
    match root {
        TreeNode::Folder {
            name,
            path,
            children,
            has_more,
        } => {
            let kept: Vec<TreeNode> = children
                .iter()
                .filter_map(|child| filter_node(child, pred))
                .collect();
            log::debug!(
                "filter {:?}: kept {}/{} top-level children",
                pred.name_contains,
                kept.len(),
                children.len()
            );
            if kept.is_empty() {
                None
            } else {
                Some(TreeNode::Folder {
                    name: name.clone(),
                    path: path.clone(),
                    children: kept,
                    has_more: *has_more,
                })
            }
        }
        // A bare file root has no descendants to match.
        TreeNode::File { .. } => None,
    }
}

fn filter_node(node: &TreeNode, pred: &NodeMatch) -> Option<TreeNode> {
    match node {
        TreeNode::File { name, .. } => pred.file_matches(name).then(|| node.clone()),
        TreeNode::Folder {
            name,
            path,
            children,
            has_more,
        } => {
            let kept: Vec<TreeNode> = children
                .iter()
                .filter_map(|child| filter_node(child, pred))
                .collect();
            if !kept.is_empty() || pred.folder_name_matches(name) {
                Some(TreeNode::Folder {
                    name: name.clone(),
                    path: path.clone(),
                    children: kept,
                    has_more: *has_more,
                })
            } else {
                None
            }
        }
    }
}
