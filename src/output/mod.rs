//! Tree serialization to flat textual formats
//!
//! Three pure renderings of a tree (or filtered subtree): indented ASCII
//! text, JSON, and a markdown outline. Each format also knows the file
//! extension the export/download collaborator should use.

mod json;
mod markdown;
mod text;

pub use json::format_json;
pub use markdown::format_markdown;
pub use text::format_text;

use crate::error::Result;
use crate::tree::TreeNode;

/// Output format selector for [`serialize`] and the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Indented ASCII tree with drawing connectors.
    Text,
    /// Structural JSON with the given spaces-per-level indent
    /// (0 means no added whitespace).
    Json { indent: usize },
    /// Markdown outline with bold folders and inline-code files.
    Markdown,
}

impl ExportFormat {
    /// Target file extension for a download of this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json { .. } => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Render the tree in the chosen format. Pure: stable across repeated
/// calls, no I/O. An absent root yields the empty string.
pub fn serialize(root: Option<&TreeNode>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(format_text(root)),
        ExportFormat::Json { indent } => format_json(root, indent),
        ExportFormat::Markdown => Ok(format_markdown(root)),
    }
}
