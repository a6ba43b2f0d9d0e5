//! Convert a Node tree to a Rich Text tree
//!
//! Top-level nodes are classified into blocks; the content of each block is
//! flattened into text and link leaves while bold/italic context is threaded
//! down the recursion.

use log::trace;
use richtext_core::{Formatting, ListType, RichTextNode};

use crate::node::{Node, NodeType};

/// Convert a parsed document to a `root` node.
///
/// The top-level nodes are the children of the `<body>` container when the
/// tree has one, otherwise the children of `node` itself.
pub fn convert(node: &Node) -> RichTextNode {
    let top_level = node.body().unwrap_or(node);
    RichTextNode::root(top_level.children().filter_map(convert_top_level).collect())
}

fn convert_top_level(node: &Node) -> Option<RichTextNode> {
    match node.node_type {
        NodeType::Text => {
            // Stray text at the top level becomes its own paragraph
            let text = node.node_value.as_deref().unwrap_or("");
            if text.trim().is_empty() {
                None
            } else {
                Some(RichTextNode::paragraph(resolve_inline(
                    node,
                    Formatting::default(),
                )))
            }
        }
        NodeType::Element => convert_block(node),
        _ => None,
    }
}

/// Block-level tags with a dedicated node shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTag {
    Heading(u8),
    Paragraph,
    List(ListType),
    Quote,
    Other,
}

impl BlockTag {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "h1" => BlockTag::Heading(1),
            "h2" => BlockTag::Heading(2),
            "h3" => BlockTag::Heading(3),
            "h4" => BlockTag::Heading(4),
            "h5" => BlockTag::Heading(5),
            "h6" => BlockTag::Heading(6),
            "p" => BlockTag::Paragraph,
            "ul" => BlockTag::List(ListType::Unordered),
            "ol" => BlockTag::List(ListType::Ordered),
            "blockquote" => BlockTag::Quote,
            _ => BlockTag::Other,
        }
    }
}

/// Convert a top-level element to at most one block
fn convert_block(node: &Node) -> Option<RichTextNode> {
    let tag = node.tag_name();
    let inlines = || resolve_inline(node, Formatting::default());

    match BlockTag::from_tag(&tag) {
        BlockTag::Heading(level) => Some(RichTextNode::heading(level, inlines())),
        BlockTag::Paragraph => Some(RichTextNode::paragraph(inlines())),
        BlockTag::List(list_type) => convert_list(node, list_type),
        BlockTag::Quote => Some(RichTextNode::quote(inlines())),
        BlockTag::Other => {
            trace!("no block rule for <{}>, treating as paragraph", tag);
            Some(RichTextNode::paragraph(inlines()))
        }
    }
}

/// Convert ul/ol. Only direct `li` children count; a list without any
/// non-empty item is dropped.
fn convert_list(node: &Node, list_type: ListType) -> Option<RichTextNode> {
    let items: Vec<RichTextNode> = node
        .element_children()
        .filter(|child| child.tag_name() == "li")
        .filter_map(|li| {
            let inlines = resolve_inline(li, Formatting::default());
            if inlines.is_empty() {
                trace!("dropping empty list item");
                None
            } else {
                Some(RichTextNode::list_item(inlines))
            }
        })
        .collect();

    if items.is_empty() {
        trace!("dropping <{}> without items", node.tag_name());
        None
    } else {
        Some(RichTextNode::list(list_type, items))
    }
}

/// Inline tags that change the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineTag {
    Bold,
    Italic,
    Anchor,
    Other,
}

impl InlineTag {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "strong" | "b" => InlineTag::Bold,
            "em" | "i" => InlineTag::Italic,
            "a" => InlineTag::Anchor,
            _ => InlineTag::Other,
        }
    }
}

/// Flatten a node into text and link leaves.
///
/// Whitespace-only text vanishes. Elements other than formatting tags and
/// anchors are unwrapped: they contribute their resolved children only.
fn resolve_inline(node: &Node, formatting: Formatting) -> Vec<RichTextNode> {
    match node.node_type {
        NodeType::Text => {
            let text = node.node_value.as_deref().unwrap_or("");
            if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![RichTextNode::text(text, formatting)]
            }
        }
        NodeType::Comment | NodeType::Other => Vec::new(),
        _ => match InlineTag::from_tag(&node.tag_name()) {
            InlineTag::Bold => resolve_children(node, formatting.with_bold()),
            InlineTag::Italic => resolve_children(node, formatting.with_italic()),
            InlineTag::Anchor => vec![resolve_link(node, formatting)],
            InlineTag::Other => resolve_children(node, formatting),
        },
    }
}

fn resolve_children(node: &Node, formatting: Formatting) -> Vec<RichTextNode> {
    node.children()
        .flat_map(|child| resolve_inline(child, formatting))
        .collect()
}

fn resolve_link(node: &Node, formatting: Formatting) -> RichTextNode {
    let children = match resolve_children(node, formatting) {
        children if children.is_empty() => {
            // Keep the link renderable: fall back to its raw text
            let text = node.text_content();
            trace!("link without inline content, using text {:?}", text);
            vec![RichTextNode::text(&text, formatting)]
        }
        children => children,
    };

    RichTextNode::link(
        node.attr("href").map(str::to_string),
        node.attr("title").map(str::to_string),
        node.attr("target").map(str::to_string),
        children,
    )
}
