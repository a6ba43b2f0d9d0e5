//! JSON serialization of the Rich Text tree

use serde_json::Value;

use crate::ast::RichTextNode;
use crate::options::Options;

/// Serialize a tree to a JSON string
pub fn to_json(node: &RichTextNode, options: &Options) -> serde_json::Result<String> {
    if options.pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }
}

/// Serialize a tree to a `serde_json::Value`
pub fn to_value(node: &RichTextNode) -> serde_json::Result<Value> {
    serde_json::to_value(node)
}

/// Read a previously serialized tree back
pub fn from_json(json: &str) -> serde_json::Result<RichTextNode> {
    serde_json::from_str(json)
}
