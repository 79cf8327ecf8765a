//! JSON output formatting

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::tree::TreeNode;

/// Render the tree as order-preserving JSON.
///
/// `indent` is the number of spaces per nesting level; 0 produces the
/// compact form with no added whitespace.
pub fn format_json(root: Option<&TreeNode>, indent: usize) -> Result<String> {
    let Some(root) = root else {
        return Ok(String::new());
    };
    if indent == 0 {
        return Ok(serde_json::to_string(root)?);
    }
    let indent_bytes = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent_bytes));
    root.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}
