//! Structural invariants of converted trees over generated markup.

use proptest::prelude::*;
use richtext::{convert, RichTextNode, RichTextNodeType};
use serde_json::Value;

const TAGS: &[&str] = &[
    "p", "h1", "h4", "h6", "ul", "ol", "li", "blockquote", "strong", "b", "em", "i", "a",
    "span", "div", "section",
];

const TYPES: &[&str] = &[
    "root",
    "paragraph",
    "heading",
    "list",
    "list-item",
    "quote",
    "text",
    "link",
];

/// Random, mostly well-nested HTML built from the tags the converter knows
/// about plus a few it doesn't.
fn markup() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}",
        Just(" \n ".to_string()),
        Just("<br>".to_string()),
        Just("<!-- c -->".to_string()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            proptest::sample::select(TAGS),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| format!("<{tag}>{}</{tag}>", children.concat()))
    })
}

fn fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(markup(), 0..5).prop_map(|parts| parts.concat())
}

fn check_json_types(value: &Value) -> Result<(), TestCaseError> {
    let ty = value["type"].as_str().unwrap_or("<missing>");
    prop_assert!(TYPES.contains(&ty), "unexpected type {}", ty);
    if let Some(object) = value.as_object() {
        for flag in ["bold", "italic"] {
            if let Some(v) = object.get(flag) {
                prop_assert_eq!(v, &Value::Bool(true));
            }
        }
    }
    if let Some(children) = value["children"].as_array() {
        for child in children {
            check_json_types(child)?;
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_type_is_in_closed_set(html in fragment()) {
        let value = richtext::to_value(&convert(&html)).unwrap();
        prop_assert_eq!(value["type"].as_str(), Some("root"));
        check_json_types(&value)?;
    }

    #[test]
    fn quotes_wrap_exactly_one_paragraph(html in fragment()) {
        let tree = convert(&html);
        for node in tree.descendants() {
            if node.node_type() == RichTextNodeType::Quote {
                prop_assert_eq!(node.children().len(), 1);
                prop_assert_eq!(node.children()[0].node_type(), RichTextNodeType::Paragraph);
            }
        }
    }

    #[test]
    fn lists_and_items_are_never_empty(html in fragment()) {
        let tree = convert(&html);
        for node in tree.descendants() {
            match node.node_type() {
                RichTextNodeType::List => {
                    prop_assert!(!node.children().is_empty());
                    for item in node.children() {
                        prop_assert_eq!(item.node_type(), RichTextNodeType::ListItem);
                    }
                }
                RichTextNodeType::ListItem => prop_assert!(!node.children().is_empty()),
                _ => {}
            }
        }
    }

    #[test]
    fn blocks_hold_only_inline_content(html in fragment()) {
        let tree = convert(&html);
        for block in tree.children() {
            prop_assert!(block.is_block());
        }
        for node in tree.descendants() {
            if matches!(
                node.node_type(),
                RichTextNodeType::Paragraph
                    | RichTextNodeType::Heading
                    | RichTextNodeType::ListItem
                    | RichTextNodeType::Link
            ) {
                for child in node.children() {
                    prop_assert!(child.is_inline());
                }
            }
        }
    }

    #[test]
    fn text_values_have_no_outer_newlines(html in fragment()) {
        let tree = convert(&html);
        for node in tree.descendants() {
            if let RichTextNode::Text { value, .. } = node {
                prop_assert!(!value.starts_with('\n') && !value.ends_with('\n'));
            }
        }
    }

    #[test]
    fn arbitrary_input_always_converts(html in any::<String>()) {
        let tree = convert(&html);
        prop_assert_eq!(tree.node_type(), RichTextNodeType::Root);
        prop_assert_eq!(convert(&html), tree);
    }
}
