//! Rich Text document tree
//!
//! This module defines the nodes of the Rich Text document model. The tree is
//! the output of the HTML converter and serializes directly to the JSON shape
//! expected by the content platform (`type`, `children`, `listType`, ...).

use serde::{Deserialize, Serialize};

/// Kind of a `list` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Numbered list (`<ol>`)
    Ordered,
    /// Bulleted list (`<ul>`)
    Unordered,
}

/// The closed set of node type tags that can appear in a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Paragraph,
    Heading,
    List,
    ListItem,
    Quote,
    Text,
    Link,
}

impl NodeType {
    /// Every node type, in schema order
    pub const ALL: [NodeType; 8] = [
        NodeType::Root,
        NodeType::Paragraph,
        NodeType::Heading,
        NodeType::List,
        NodeType::ListItem,
        NodeType::Quote,
        NodeType::Text,
        NodeType::Link,
    ];

    /// The `type` value used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "root",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading => "heading",
            NodeType::List => "list",
            NodeType::ListItem => "list-item",
            NodeType::Quote => "quote",
            NodeType::Text => "text",
            NodeType::Link => "link",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inherited inline formatting.
///
/// Formatting only accumulates: descending into `<strong>` sets `bold`, but
/// nothing ever clears a flag set by an ancestor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
}

impl Formatting {
    /// Same formatting with bold turned on
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Same formatting with italic turned on
    pub fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}

/// A node of the Rich Text tree.
///
/// Block nodes (`Paragraph`, `Heading`, `List`, `ListItem`, `Quote`) hold
/// inline content; inline nodes (`Text`, `Link`) are the leaves. Every node
/// owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RichTextNode {
    /// Top-level container
    Root { children: Vec<RichTextNode> },

    /// Paragraph of inline content
    Paragraph { children: Vec<RichTextNode> },

    /// Heading with level (1-6) and inline content
    Heading {
        level: u8,
        children: Vec<RichTextNode>,
    },

    /// List of `ListItem` nodes
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        children: Vec<RichTextNode>,
    },

    /// Single list entry with inline content
    ListItem { children: Vec<RichTextNode> },

    /// Block quote, always wrapping exactly one paragraph
    Quote { children: Vec<RichTextNode> },

    /// Text leaf; flags are omitted from the output unless set
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "is_false")]
        bold: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        italic: bool,
    },

    /// Hyperlink; absent attributes serialize as `null`
    Link {
        url: Option<String>,
        title: Option<String>,
        target: Option<String>,
        children: Vec<RichTextNode>,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RichTextNode {
    pub fn root(children: Vec<RichTextNode>) -> Self {
        RichTextNode::Root { children }
    }

    pub fn paragraph(children: Vec<RichTextNode>) -> Self {
        RichTextNode::Paragraph { children }
    }

    pub fn heading(level: u8, children: Vec<RichTextNode>) -> Self {
        RichTextNode::Heading { level, children }
    }

    pub fn list(list_type: ListType, items: Vec<RichTextNode>) -> Self {
        RichTextNode::List {
            list_type,
            children: items,
        }
    }

    pub fn list_item(children: Vec<RichTextNode>) -> Self {
        RichTextNode::ListItem { children }
    }

    /// Create a quote, wrapping `inlines` in a single synthetic paragraph
    pub fn quote(inlines: Vec<RichTextNode>) -> Self {
        RichTextNode::Quote {
            children: vec![RichTextNode::paragraph(inlines)],
        }
    }

    /// Create a text node.
    ///
    /// Only leading and trailing newlines are stripped from `value`; spaces
    /// are significant between adjacent inline nodes and are kept.
    pub fn text(value: &str, formatting: Formatting) -> Self {
        RichTextNode::Text {
            value: value.trim_matches('\n').to_string(),
            bold: formatting.bold,
            italic: formatting.italic,
        }
    }

    pub fn link(
        url: Option<String>,
        title: Option<String>,
        target: Option<String>,
        children: Vec<RichTextNode>,
    ) -> Self {
        RichTextNode::Link {
            url,
            title,
            target,
            children,
        }
    }

    /// The type tag of this node
    pub fn node_type(&self) -> NodeType {
        match self {
            RichTextNode::Root { .. } => NodeType::Root,
            RichTextNode::Paragraph { .. } => NodeType::Paragraph,
            RichTextNode::Heading { .. } => NodeType::Heading,
            RichTextNode::List { .. } => NodeType::List,
            RichTextNode::ListItem { .. } => NodeType::ListItem,
            RichTextNode::Quote { .. } => NodeType::Quote,
            RichTextNode::Text { .. } => NodeType::Text,
            RichTextNode::Link { .. } => NodeType::Link,
        }
    }

    /// Child nodes (empty for text leaves)
    pub fn children(&self) -> &[RichTextNode] {
        match self {
            RichTextNode::Root { children }
            | RichTextNode::Paragraph { children }
            | RichTextNode::Heading { children, .. }
            | RichTextNode::List { children, .. }
            | RichTextNode::ListItem { children }
            | RichTextNode::Quote { children }
            | RichTextNode::Link { children, .. } => children,
            RichTextNode::Text { .. } => &[],
        }
    }

    /// Check if this is a block-level node
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            RichTextNode::Paragraph { .. }
                | RichTextNode::Heading { .. }
                | RichTextNode::List { .. }
                | RichTextNode::ListItem { .. }
                | RichTextNode::Quote { .. }
        )
    }

    /// Check if this is an inline leaf (text or link)
    pub fn is_inline(&self) -> bool {
        matches!(self, RichTextNode::Text { .. } | RichTextNode::Link { .. })
    }

    /// Concatenated text of all descendant text nodes, in document order
    pub fn plain_text(&self) -> String {
        match self {
            RichTextNode::Text { value, .. } => value.clone(),
            _ => self.children().iter().map(|c| c.plain_text()).collect(),
        }
    }

    /// Depth-first, pre-order walk over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`RichTextNode::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a RichTextNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RichTextNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
