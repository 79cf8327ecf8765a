//! Tree chunking for incremental loading
//!
//! Partitions an arbitrarily large tree into a shallow root view plus a
//! map of path-keyed chunks so a consumer can render or download the
//! hierarchy lazily instead of materializing millions of nodes at once.

use indexmap::IndexMap;

use crate::error::{Result, TreeError};
use crate::tree::TreeNode;

/// Chunked view of one tree.
///
/// `root_tree` is the original root with each immediate folder child
/// emptied of further descendants; `chunks` maps a chunk key (a node
/// path, optionally suffixed with `_N`) to the child nodes deferred from
/// inlining. Insertion order follows traversal order, so the whole view
/// is deterministic for a fixed input and chunk size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkedTree {
    /// Shallow root view; `None` exactly when the input root was absent.
    pub root_tree: Option<TreeNode>,
    pub chunks: IndexMap<String, Vec<TreeNode>>,
}

impl ChunkedTree {
    /// Deferred children stored under `key`, if any.
    pub fn chunk(&self, key: &str) -> Option<&[TreeNode]> {
        self.chunks.get(key).map(Vec::as_slice)
    }
}

/// Path of the node a chunk splices into: the key itself, or the key
/// with its numeric `_N` overflow suffix stripped.
pub fn chunk_parent_path(key: &str) -> &str {
    match key.rsplit_once('_') {
        Some((path, index)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
            path
        }
        _ => key,
    }
}

/// Partition `root` into a shallow root view plus bounded chunks.
///
/// Every top-level folder whose whole subtree fits within
/// `max_nodes_per_chunk` gets its child list stored verbatim under its
/// own path. An oversized folder is walked in order into buffers of at
/// most `max_nodes_per_chunk` items flushed under `path_0`, `path_1`, …;
/// any non-empty folder met during that walk has its children moved into
/// a chunk keyed by its own path, its `children` cleared and `has_more`
/// set. That split is one level deep only: a sub-folder's own oversized
/// children are not divided further by this pass.
pub fn chunk_tree(root: Option<&TreeNode>, max_nodes_per_chunk: usize) -> Result<ChunkedTree> {
    if max_nodes_per_chunk == 0 {
        return Err(TreeError::InvalidArgument(
            "max_nodes_per_chunk must be positive".to_string(),
        ));
    }
    let Some(root) = root else {
        return Ok(ChunkedTree::default());
    };

    let mut chunks: IndexMap<String, Vec<TreeNode>> = IndexMap::new();

    for child in root.children() {
        if let TreeNode::Folder { path, children, .. } = child {
            if children.is_empty() {
                continue;
            }
            if child.descendant_count() <= max_nodes_per_chunk {
                insert_chunk(&mut chunks, path.clone(), children.clone())?;
            } else {
                overflow_chunks(path, children, max_nodes_per_chunk, &mut chunks)?;
            }
        }
    }

    let root_tree = match root {
        TreeNode::Folder {
            name,
            path,
            children,
            has_more,
        } => TreeNode::Folder {
            name: name.clone(),
            path: path.clone(),
            children: children.iter().map(shallow_child).collect(),
            has_more: *has_more,
        },
        file => file.clone(),
    };

    log::debug!(
        "chunked {} nodes into {} chunks (max {} per chunk)",
        root.node_count(),
        chunks.len(),
        max_nodes_per_chunk
    );

    Ok(ChunkedTree {
        root_tree: Some(root_tree),
        chunks,
    })
}

/// Immediate child as it appears in the root view: folders are emptied
/// and flagged when their children moved to a chunk, files stay as-is.
fn shallow_child(child: &TreeNode) -> TreeNode {
    match child {
        TreeNode::Folder {
            name,
            path,
            children,
            ..
        } => TreeNode::Folder {
            name: name.clone(),
            path: path.clone(),
            children: Vec::new(),
            has_more: !children.is_empty(),
        },
        file => file.clone(),
    }
}

/// Walk an oversized folder's children in order, flushing numbered
/// buffers and splitting out nested non-empty folders as own chunks.
fn overflow_chunks(
    folder_path: &str,
    children: &[TreeNode],
    max: usize,
    chunks: &mut IndexMap<String, Vec<TreeNode>>,
) -> Result<()> {
    let mut buffer: Vec<TreeNode> = Vec::new();
    let mut chunk_index = 0usize;

    for child in children {
        let item = match child {
            TreeNode::Folder {
                name,
                path,
                children: grandchildren,
                ..
            } if !grandchildren.is_empty() => {
                insert_chunk(chunks, path.clone(), grandchildren.clone())?;
                TreeNode::Folder {
                    name: name.clone(),
                    path: path.clone(),
                    children: Vec::new(),
                    has_more: true,
                }
            }
            other => other.clone(),
        };
        buffer.push(item);
        if buffer.len() == max {
            insert_chunk(
                chunks,
                format!("{}_{}", folder_path, chunk_index),
                std::mem::take(&mut buffer),
            )?;
            chunk_index += 1;
        }
    }

    if !buffer.is_empty() {
        insert_chunk(chunks, format!("{}_{}", folder_path, chunk_index), buffer)?;
    }
    Ok(())
}

/// A key collision would silently lose nodes, so it fails fast instead.
/// Collisions come from duplicate paths, or from the key format itself:
/// a real folder named like an overflow key (`src_0` beside an
/// overflowing `src`) claims the same key, and such snapshots are
/// rejected rather than disambiguated.
fn insert_chunk(
    chunks: &mut IndexMap<String, Vec<TreeNode>>,
    key: String,
    nodes: Vec<TreeNode>,
) -> Result<()> {
    if chunks.contains_key(&key) {
        return Err(TreeError::MalformedTree(format!(
            "duplicate chunk key {:?}",
            key
        )));
    }
    chunks.insert(key, nodes);
    Ok(())
}
