//! repotree - Tree model and transformation pipeline behind a repository visualizer
//!
//! The core consumes one `TreeNode` graph from a repository-fetching
//! collaborator and offers four pure, synchronous transformations over
//! it: statistics aggregation, filter/search, chunking for incremental
//! loading, and serialization to text/JSON/Markdown. Every operation
//! returns a fresh structure and never mutates its input, so concurrent
//! calls over the same source tree need no coordination.

pub mod error;
pub mod output;
pub mod tree;

pub use error::{Result, TreeError};
pub use output::{format_json, format_markdown, format_text, serialize, ExportFormat};
pub use tree::{
    chunk_parent_path, chunk_tree, compute_stats, filter_tree, ChunkedTree, NodeMatch,
    StatsSummary, TreeNode, NO_EXTENSION_KEY,
};
