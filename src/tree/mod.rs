//! The hierarchical tree model and its transformations
//!
//! - `node`: the canonical `TreeNode` representation and its invariants
//! - `stats`: single-pass aggregation of counts, sizes, and depth
//! - `filter`: predicate search preserving ancestor folders
//! - `chunk`: partitioning into bounded chunks for incremental loading

mod chunk;
mod filter;
mod node;
mod stats;

pub use chunk::{chunk_parent_path, chunk_tree, ChunkedTree};
pub use filter::{filter_tree, NodeMatch};
pub use node::TreeNode;
pub use stats::{compute_stats, StatsSummary, NO_EXTENSION_KEY};
