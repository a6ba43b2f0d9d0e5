//! # richtext
//!
//! Convert HTML fragments to Rich Text JSON trees.
//!
//! HTML produced by rich-text editors and CMSes is normalized into a strict
//! document tree with a fixed vocabulary: `root`, `paragraph`, `heading`,
//! `list`, `list-item`, `quote`, `text` and `link`. The tree serializes to
//! the Rich Text JSON schema used by Shopify metafields.
//!
//! ## Design
//!
//! Conversion runs over a CDP-style [`Node`] tree rather than a specific
//! parser's DOM:
//!
//! - **Parser agnostic**: any HTML parser or browser bridge can build a `Node`
//!   tree and call [`convert_node`]
//! - **Batteries included**: the default `html` feature bundles scraper
//!   (html5ever) for string input
//! - **Total**: every input yields a tree; unknown blocks become paragraphs
//!   and unknown inline elements are unwrapped
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use richtext::{convert, RichTextService};
//!
//! let tree = convert("<p><strong>Hello</strong> world</p>");
//! assert_eq!(tree.plain_text(), "Hello world");
//!
//! let json = RichTextService::new().convert_to_json("<h1>Title</h1>").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"type":"root","children":[{"type":"heading","level":1,"children":[{"type":"text","value":"Title"}]}]}"#
//! );
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use richtext::{convert_node, Node};
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//! let mut fragment = Node::document_fragment();
//! fragment.add_child(h1);
//!
//! let tree = convert_node(&fragment);
//! assert_eq!(tree.children().len(), 1);
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use richtext_core::{
    from_json, to_json, to_value, Formatting, ListType, NodeType as RichTextNodeType,
    RichTextNode,
};
pub use service::{RichTextOptions, RichTextService};

/// Error type for richtext operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Convert an HTML fragment to a Rich Text `root` node with default options
#[cfg(feature = "html")]
pub fn convert(html: &str) -> RichTextNode {
    RichTextService::new().convert(html)
}

/// Convert a parsed DOM tree to a Rich Text `root` node
pub fn convert_node(node: &Node) -> RichTextNode {
    convert::convert(node)
}
