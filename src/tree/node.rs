//! The canonical tree model
//!
//! `TreeNode` is the in-memory representation of one file-system entry and
//! its subtree, as delivered by the repository-fetching collaborator. All
//! transformations in this crate treat it as immutable input and return
//! freshly built trees.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};

fn is_false(v: &bool) -> bool {
    !*v
}

/// One entry in the hierarchy.
///
/// The `kind` tag serializes as `file`/`folder`; the upstream API's
/// `blob`/`tree` spellings are accepted on deserialization. A file can
/// never carry children by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    #[serde(alias = "blob")]
    File {
        name: String,
        /// Unique slash-separated identifier from the root; stable across
        /// filtering and chunking, and the sole identity key.
        path: String,
        /// Byte count, when the source reported one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
    },
    #[serde(alias = "tree")]
    Folder {
        name: String,
        path: String,
        /// Insertion-ordered children. An empty list can mean "no children
        /// exist" or "children deferred by the chunker"; consumers must
        /// consult the chunk map to tell the two apart.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<TreeNode>,
        /// Set by the chunker when this folder's children were deferred
        /// into a separate chunk rather than inlined.
        #[serde(default, rename = "hasMore", skip_serializing_if = "is_false")]
        has_more: bool,
    },
}

impl TreeNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: Option<u64>) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
            size,
        }
    }

    /// Create a folder node with the given children.
    pub fn folder(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode::Folder {
            name: name.into(),
            path: path.into(),
            children,
            has_more: false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Folder { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Folder { path, .. } => path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Children of this node; files yield an empty slice.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Folder { children, .. } => children,
        }
    }

    /// Reported byte size; `None` for folders and unsized files.
    pub fn size(&self) -> Option<u64> {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Folder { .. } => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.descendant_count()
    }

    /// Number of nodes strictly below `self`.
    pub fn descendant_count(&self) -> usize {
        self.children().iter().map(TreeNode::node_count).sum()
    }

    /// Parse a tree from JSON and validate it.
    ///
    /// This is the ingestion boundary: the invariants are enforced once
    /// here so the transformations never re-check them on every read.
    pub fn from_json(json: &str) -> Result<TreeNode> {
        let root: TreeNode = serde_json::from_str(json)?;
        root.validate()?;
        Ok(root)
    }

    /// Check the structural invariants of this snapshot:
    /// every child's path extends its parent's path with the child's
    /// name, and paths are unique within the tree.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        self.validate_node(None, &mut seen)
    }

    fn validate_node<'a>(
        &'a self,
        parent_path: Option<&str>,
        seen: &mut HashSet<&'a str>,
    ) -> Result<()> {
        if let Some(parent) = parent_path {
            let expected = format!("{}/{}", parent, self.name());
            if self.path() != expected {
                return Err(TreeError::MalformedTree(format!(
                    "orphan path {:?}, expected {:?}",
                    self.path(),
                    expected
                )));
            }
        }
        if !seen.insert(self.path()) {
            return Err(TreeError::MalformedTree(format!(
                "duplicate path {:?}",
                self.path()
            )));
        }
        for child in self.children() {
            child.validate_node(Some(self.path()), seen)?;
        }
        Ok(())
    }
}
