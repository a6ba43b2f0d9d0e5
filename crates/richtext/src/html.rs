//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and maps the
//! result onto the CDP-style [`Node`] tree the converter walks.

use log::trace;
use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree.
///
/// Fragments yield a document fragment whose children are the fragment's
/// top-level nodes. Input carrying `<html>`, `<head>` or `<body>` tags is
/// parsed as a full document instead, so the result keeps its `<body>`
/// container and head content stays out of the top level. Parsing is
/// lenient: unclosed tags, stray text and unknown elements are normalized by
/// html5ever and never fail.
///
/// # Example
///
/// ```rust
/// use richtext::{convert_node, parse_html};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(node.children().count(), 1);
///
/// let tree = convert_node(&node);
/// assert_eq!(tree.plain_text(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    if has_document_tags(html) {
        let document = Html::parse_document(html);
        let mut root = Node::document();
        root.add_child(scraper_to_node(document.root_element()));
        return root;
    }

    let document = Html::parse_fragment(html);

    // scraper wraps fragment content in a synthetic <html> element
    let mut fragment = Node::document_fragment();
    append_children(&mut fragment, document.root_element());
    fragment
}

/// Check for an `<html>`, `<head>` or `<body>` start tag (case-insensitive)
fn has_document_tags(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    ["<html", "<head", "<body"].iter().any(|tag| {
        lower.match_indices(tag).any(|(start, _)| {
            // `<header` and friends are not document tags
            match lower[start + tag.len()..].chars().next() {
                None => true,
                Some(c) => c == '>' || c == '/' || c.is_ascii_whitespace(),
            }
        })
    })
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let mut node = Node::element_with_attrs(element.value().name(), element.value().attrs());
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            other => {
                trace!("skipping non-content node {:?}", other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert_eq!(node.node_type, NodeType::DocumentFragment);
        let p = node.children().next().unwrap();
        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_keeps_top_level_text() {
        let node = parse_html("stray <b>bold</b> tail");
        let kinds: Vec<NodeType> = node.children().map(|n| n.node_type).collect();
        assert_eq!(kinds, vec![NodeType::Text, NodeType::Element, NodeType::Text]);
    }

    #[test]
    fn test_parse_attributes() {
        let node = parse_html(r#"<a HREF="https://x.com" target="_blank">x</a>"#);
        let a = node.children().next().unwrap();
        assert_eq!(a.attr("href"), Some("https://x.com"));
        assert_eq!(a.attr("target"), Some("_blank"));
        assert_eq!(a.attr("title"), None);
    }

    #[test]
    fn test_parse_lowercases_tags() {
        let node = parse_html("<H2>Up</H2>");
        assert_eq!(node.children().next().unwrap().tag_name(), "h2");
    }

    #[test]
    fn test_parse_comment() {
        let node = parse_html("<!-- note --><p>x</p>");
        let first = node.children().next().unwrap();
        assert_eq!(first.node_type, NodeType::Comment);
        assert_eq!(first.text_content(), "");
    }

    #[test]
    fn test_parse_full_document_keeps_body() {
        let node = parse_html("<html><head><title>T</title></head><body><p>x</p></body></html>");
        assert_eq!(node.node_type, NodeType::Document);
        let body = node.body().expect("body container");
        let tags: Vec<String> = body.children().map(|n| n.tag_name()).collect();
        assert_eq!(tags, vec!["p"]);
    }

    #[test]
    fn test_parse_head_and_body_without_html_tag() {
        let node = parse_html("<HEAD><style>p{}</style></HEAD><Body class=\"x\"><p>x</p></Body>");
        let body = node.body().expect("body container");
        assert_eq!(body.text_content(), "x");
    }

    #[test]
    fn test_document_tag_detection() {
        assert!(has_document_tags("<body><p>x</p></body>"));
        assert!(has_document_tags("<HTML lang=\"en\">"));
        assert!(has_document_tags("<head/>"));
        assert!(!has_document_tags("<header><p>x</p></header>"));
        assert!(!has_document_tags("<p>body text</p>"));
    }

    #[test]
    fn test_parse_header_stays_fragment() {
        let node = parse_html("<header>top</header>");
        assert_eq!(node.node_type, NodeType::DocumentFragment);
        assert!(node.body().is_none());
    }

    #[test]
    fn test_parse_unclosed_tags() {
        let node = parse_html("<p>one<p>two");
        let texts: Vec<String> = node.children().map(|n| n.text_content()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }
}
