//! CDP-style DOM Node structure consumed by the converter.
//!
//! This module provides a small DOM tree modeled on the Chrome DevTools
//! Protocol DOM.Node structure. The bundled HTML parser produces it, and any
//! other parser or browser bridge can build it to reuse the converter.

use indexmap::IndexMap;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
    /// Any other node kind (doctype, processing instruction, ...)
    Other = 0,
}

impl From<u32> for NodeType {
    fn from(value: u32) -> Self {
        match value {
            1 => NodeType::Element,
            3 => NodeType::Text,
            8 => NodeType::Comment,
            9 => NodeType::Document,
            11 => NodeType::DocumentFragment,
            _ => NodeType::Other,
        }
    }
}

/// A DOM node following the CDP DOM.Node structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g. "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes keyed by lowercase name, in source order
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    fn new(node_type: NodeType, node_name: String, node_value: Option<String>) -> Self {
        Self {
            node_type,
            node_name,
            node_value,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, tag_name.to_uppercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs<'a>(
        tag_name: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::new(NodeType::Text, "#text".to_string(), Some(content.to_string()))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::new(
            NodeType::Comment,
            "#comment".to_string(),
            Some(content.to_string()),
        )
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::new(NodeType::Document, "#document".to_string(), None)
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self::new(
            NodeType::DocumentFragment,
            "#document-fragment".to_string(),
            None,
        )
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Find the `<body>` container, if the tree has one.
    ///
    /// The search is depth-first and includes this node itself.
    pub fn body(&self) -> Option<&Node> {
        if self.is_element() && self.tag_name() == "body" {
            return Some(self);
        }
        self.children().find_map(Node::body)
    }

    /// Get all text content from this node and descendants.
    ///
    /// Comment text and unknown node kinds are not included.
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment | NodeType::Other => String::new(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }
}
