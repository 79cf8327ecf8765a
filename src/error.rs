//! Error taxonomy for the tree engine

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors produced by tree transformations.
///
/// An absent root is never an error: every component treats it as the
/// empty-tree case and returns a zero-valued/empty result so callers can
/// degrade gracefully instead of crashing.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A caller supplied an argument outside the component's domain,
    /// e.g. a chunk size of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node violates the tree model's invariants, e.g. a duplicate
    /// path within one snapshot or a child path that does not extend its
    /// parent's path.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// Serialization or ingestion of a tree failed at the JSON boundary.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
