//! richtext-core - Rich Text document model and serialization
//!
//! This crate provides the output tree of the HTML converter and its JSON
//! form. It has no HTML parser dependency; `richtext` builds on it.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──scraper──▶ ┌──────────┐
//!                          │          │
//!                          │ Node     │ ──convert──▶ RichTextNode ──▶ JSON
//! Any DOM tree ───────────▶│          │
//!                          └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{to_json, Formatting, Options, RichTextNode};
//!
//! let tree = RichTextNode::root(vec![
//!     RichTextNode::heading(1, vec![RichTextNode::text("Hello", Formatting::default())]),
//!     RichTextNode::paragraph(vec![
//!         RichTextNode::text("This is ", Formatting::default()),
//!         RichTextNode::text("bold", Formatting::default().with_bold()),
//!     ]),
//! ]);
//!
//! let json = to_json(&tree, &Options::default()).unwrap();
//! assert!(json.starts_with(r#"{"type":"root""#));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{Descendants, Formatting, ListType, NodeType, RichTextNode};
pub use options::Options;
pub use serialize::{from_json, to_json, to_value};
