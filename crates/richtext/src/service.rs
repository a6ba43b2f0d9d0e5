//! RichTextService - the main entry point for HTML to Rich Text conversion.

use richtext_core::{NodeType as RichTextNodeType, RichTextNode};

use crate::convert::convert;
use crate::node::Node;
use crate::{Result, RichTextError};

// Re-export options from core
pub use richtext_core::Options as RichTextOptions;

/// The main service for converting HTML to Rich Text trees
#[derive(Debug, Clone, Default)]
pub struct RichTextService {
    options: RichTextOptions,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: RichTextOptions) -> Self {
        Self { options }
    }

    /// Convert an HTML fragment to a `root` node.
    ///
    /// Empty input short-circuits to an empty root without parsing.
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> RichTextNode {
        if html.is_empty() {
            return RichTextNode::root(Vec::new());
        }

        let document = crate::html::parse_html(html);
        let tree = self.convert_node(&document);
        log::debug!(
            "converted {} bytes of html into {} blocks",
            html.len(),
            tree.children().len()
        );
        tree
    }

    /// Convert an already parsed DOM tree to a `root` node
    pub fn convert_node(&self, node: &Node) -> RichTextNode {
        convert(node)
    }

    /// Convert an HTML fragment straight to JSON text
    #[cfg(feature = "html")]
    pub fn convert_to_json(&self, html: &str) -> Result<String> {
        self.to_json(&self.convert(html))
    }

    /// Convert an HTML fragment to a JSON value
    #[cfg(feature = "html")]
    pub fn convert_to_value(&self, html: &str) -> Result<serde_json::Value> {
        Ok(richtext_core::to_value(&self.convert(html))?)
    }

    /// Serialize a tree using this service's options
    pub fn to_json(&self, tree: &RichTextNode) -> Result<String> {
        Ok(richtext_core::to_json(tree, &self.options)?)
    }

    /// Read a stored Rich Text document back into a tree.
    ///
    /// The document must be a `root` node.
    pub fn load_json(&self, json: &str) -> Result<RichTextNode> {
        let tree = richtext_core::from_json(json)?;
        match tree.node_type() {
            RichTextNodeType::Root => Ok(tree),
            other => Err(RichTextError::InvalidInput(format!(
                "expected a root node, found {other}"
            ))),
        }
    }

    /// Get the current options
    pub fn options(&self) -> &RichTextOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RichTextOptions {
        &mut self.options
    }
}
