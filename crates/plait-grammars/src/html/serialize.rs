//! Turns parsed fragments back into HTML source.
//!
//! Text is written verbatim, so serializing a parsed fragment reproduces the
//! input up to attribute quoting and tag name case.

use super::node::{is_boolean_attribute, Element, Kind, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    pub remove_comments: bool,
}

/// Serializes a single node.
pub fn serialize_node(node: &Node, options: SerializeOptions) -> String {
    let mut out = String::new();
    write_node(node, options, &mut out);
    out
}

/// Serializes a sequence of sibling nodes.
pub fn serialize_fragments(nodes: &[Node], options: SerializeOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, options, &mut out);
    }
    out
}

fn write_node(node: &Node, options: SerializeOptions, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Comment(_) if options.remove_comments => {}
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Element(el) => write_element(el, options, out),
    }
}

fn write_element(el: &Element, options: SerializeOptions, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag_name);

    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        if !is_boolean_attribute(name) {
            let quote = if value.contains('"') { '\'' } else { '"' };
            out.push('=');
            out.push(quote);
            out.push_str(value);
            out.push(quote);
        }
    }

    out.push('>');

    // Void elements: no content, no end tag
    if el.kind == Kind::Void {
        return;
    }

    for child in &el.children {
        write_node(child, options, out);
    }

    out.push_str("</");
    out.push_str(&el.tag_name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attr(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_text_and_comments() {
        let nodes = vec![Node::text("a "), Node::comment(" note "), Node::text(" b")];
        assert_eq!(
            serialize_fragments(&nodes, SerializeOptions::default()),
            "a <!-- note --> b"
        );
        assert_eq!(
            serialize_fragments(&nodes, SerializeOptions { remove_comments: true }),
            "a  b"
        );
    }

    #[test]
    fn test_attribute_quoting() {
        let el = Element::new(
            "div",
            vec![attr("title", "say \"hi\""), attr("class", "a b"), attr("data-x", "")],
            Vec::new(),
        );
        assert_eq!(
            serialize_node(&Node::Element(el), SerializeOptions::default()),
            r#"<div title='say "hi"' class="a b" data-x=""></div>"#
        );
    }

    #[test]
    fn test_boolean_attributes_have_no_value() {
        let el = Element::new("input", vec![attr("type", "checkbox"), attr("checked", "")], Vec::new());
        assert_eq!(
            serialize_node(&Node::Element(el), SerializeOptions::default()),
            r#"<input type="checkbox" checked>"#
        );
    }

    #[test]
    fn test_nested_elements() {
        let button = Element::new("button", Vec::new(), vec![Node::text("click")]);
        let p = Element::new("p", Vec::new(), vec![Node::Element(button), Node::comment("x")]);
        assert_eq!(
            serialize_node(&Node::Element(p.clone()), SerializeOptions::default()),
            "<p><button>click</button><!--x--></p>"
        );
        assert_eq!(
            serialize_node(&Node::Element(p), SerializeOptions { remove_comments: true }),
            "<p><button>click</button></p>"
        );
    }
}
