//! HTML fragments and documents.
//!
//! Covers comments, text, the doctype, attributes (quoted, unquoted and
//! valueless) and the element kinds of the HTML syntax: void, raw text,
//! escapable raw text, custom and normal elements. End tags are required and
//! matched case-insensitively; character references are left untouched.

mod node;
mod serialize;

pub use node::{
    is_boolean_attribute, Element, Kind, Node, BOOLEAN_ATTRIBUTES, ESCAPABLE_RAW_TEXT_ELEMENTS,
    RAW_TEXT_ELEMENTS, VOID_ELEMENTS,
};
pub use serialize::{serialize_fragments, serialize_node, SerializeOptions};

use once_cell::sync::Lazy;
use plait::{
    alt, between, fail, from_regex, literal, many0, recursive, sep_by0, seq, succeed, whitespace,
    whitespaces, Failure, ParseOutcome, Parser, Position, ResultItem,
};
use regex::Regex;

static TEXT: Lazy<Regex> = Lazy::new(|| Regex::new("^[^<]+").expect("text regex"));
static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new("^(?i)<!DOCTYPE").expect("doctype regex"));
static HTML: Lazy<Regex> = Lazy::new(|| Regex::new("^(?i)html").expect("html regex"));
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z][a-zA-Z0-9-]*").expect("tag name regex"));
static TAG_END: Lazy<Regex> = Lazy::new(|| Regex::new("^/?>").expect("tag end regex"));
static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[^\s="'>/\p{Noncharacter_Code_Point}]+"#).expect("attribute name regex")
});
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new("^[^']*").expect("quoted regex"));
static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^"]*"#).expect("quoted regex"));
static UNQUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[^\s='"<>`]+"#).expect("unquoted regex"));

/// Sequences ending the text of a comment.
const COMMENT_STOPS: &[&str] = &["<!-", "-->", "--!>"];

fn token_of(re: &Lazy<Regex>) -> Parser<String> {
    from_regex(Regex::clone(re))
}

fn whitespace_only_text() -> Parser<Node> {
    whitespaces().map(Node::Text)
}

fn comment_text() -> Parser<String> {
    Parser::new(|input, position| {
        if input.starts_with('>') || input.starts_with("->") {
            return ParseOutcome::failure("Expected comment text", position);
        }
        let end = COMMENT_STOPS
            .iter()
            .filter_map(|stop| input.find(stop))
            .min()
            .unwrap_or(input.len());
        let text = &input[..end];
        ParseOutcome::single(text.to_string(), &input[end..], position.advance(text))
    })
}

/// An HTML comment, `<!-- text -->`.
pub fn comment() -> Parser<Node> {
    between(literal("<!--"), comment_text(), literal("-->")).map(Node::Comment)
}

/// Comments separated by whitespace, with the whitespace before the first and
/// after the last kept as (possibly empty) text nodes.
pub fn spaces_and_comments() -> Parser<Vec<Node>> {
    seq((
        whitespace_only_text(),
        sep_by0(comment(), whitespaces()),
        whitespace_only_text(),
    ))
    .map(|(leading, comments, trailing)| {
        let mut nodes = Vec::with_capacity(comments.len() + 2);
        nodes.push(leading);
        nodes.extend(comments);
        nodes.push(trailing);
        nodes
    })
}

/// The `<!DOCTYPE html>` declaration, in any case. Always yields the
/// canonical spelling.
pub fn doctype() -> Parser<Node> {
    seq((
        token_of(&DOCTYPE),
        whitespace().skip_trailing(whitespaces()),
        token_of(&HTML).skip_trailing(whitespaces()),
        literal(">"),
    ))
    .map(|_| Node::text("<!DOCTYPE html>"))
    .error("Expected a valid doctype")
}

fn attribute_name() -> Parser<String> {
    token_of(&ATTRIBUTE_NAME)
        .skip_trailing(whitespaces())
        .map(|name| name.to_lowercase())
        .error("Expected a valid attribute name")
}

fn attribute_value() -> Parser<String> {
    alt([
        between(literal("'"), token_of(&SINGLE_QUOTED), literal("'")),
        between(literal("\""), token_of(&DOUBLE_QUOTED), literal("\"")),
        token_of(&UNQUOTED),
    ])
}

/// An attribute as a `(name, value)` pair; a valueless attribute gets an
/// empty value. Trailing whitespace is skipped.
pub fn attribute() -> Parser<(String, String)> {
    alt([
        seq((
            attribute_name(),
            literal("=").skip_trailing(whitespaces()),
            attribute_value(),
        ))
        .map(|(name, _, value)| (name, value)),
        attribute_name().map(|name| (name, String::new())),
    ])
    .skip_trailing(whitespaces())
}

fn tag_name() -> Parser<String> {
    token_of(&TAG_NAME)
        .skip_trailing(whitespaces())
        .map(|name| name.to_ascii_lowercase())
        .error("Expected an ASCII alphanumeric tag name")
}

type StartTag = (String, Vec<(String, String)>);

fn start_tag() -> Parser<StartTag> {
    seq((literal("<"), tag_name(), many0(attribute()), token_of(&TAG_END)))
        .error("Expected a start tag")
        .bind(|(_, tag_name, attributes, end)| {
            if end == "/>" && Kind::of(&tag_name) != Kind::Void {
                fail().error("Unexpected self-closing tag on a non-void element")
            } else {
                succeed((tag_name, attributes))
            }
        })
}

fn end_tag(tag_name: &str) -> Parser<()> {
    let expected = format!("</{tag_name}>");
    let message = format!("Expected a '{expected}' end tag");
    Parser::new(move |input, position| match input.get(..expected.len()) {
        Some(found) if found.eq_ignore_ascii_case(&expected) => {
            ParseOutcome::single((), &input[expected.len()..], position.advance(found))
        }
        _ => ParseOutcome::failure(message.as_str(), position),
    })
}

/// Content of a raw text element: everything up to `</tag` followed by `>`,
/// `/` or a line break.
fn raw_text(tag_name: &str) -> Parser<Vec<Node>> {
    let tag_name = tag_name.to_string();
    Parser::new(move |input, position| {
        let end = raw_text_end(input, &tag_name);
        let text = &input[..end];
        let children = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::text(text)]
        };
        ParseOutcome::single(children, &input[end..], position.advance(text))
    })
}

fn raw_text_end(input: &str, tag_name: &str) -> usize {
    input
        .match_indices("</")
        .map(|(index, _)| index)
        .find(|&index| {
            let rest = &input[index + 2..];
            rest.get(..tag_name.len())
                .is_some_and(|name| name.eq_ignore_ascii_case(tag_name))
                && matches!(rest.as_bytes().get(tag_name.len()), Some(b'>' | b'/' | b'\n'))
        })
        .unwrap_or(input.len())
}

fn first<'a, T>(outcome: ParseOutcome<'a, T>, position: Position) -> Result<ResultItem<'a, T>, Failure> {
    match outcome {
        ParseOutcome::Success(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| Failure::new("", position)),
        ParseOutcome::Failure(failure) => Err(failure),
    }
}

fn parse_element<'a>(
    start: &Parser<StartTag>,
    fragments: &Parser<Vec<Node>>,
    input: &'a str,
    position: Position,
) -> Result<ResultItem<'a, Element>, Failure> {
    let opened = first(start.parse_at(input, position), position)?;
    let (tag_name, attributes) = opened.value;
    let kind = Kind::of(&tag_name);

    if kind == Kind::Void || opened.remaining.is_empty() {
        let element = Element {
            tag_name,
            kind,
            attributes,
            children: Vec::new(),
        };
        return Ok(ResultItem::new(element, opened.remaining, opened.position));
    }

    let content = if kind.is_raw_text() {
        raw_text(&tag_name)
    } else {
        fragments.clone()
    };
    let children = first(content.parse_at(opened.remaining, opened.position), opened.position)?;
    let closed = first(
        end_tag(&tag_name).parse_at(children.remaining, children.position),
        children.position,
    )?;

    let element = Element {
        tag_name,
        kind,
        attributes,
        children: children.value,
    };
    Ok(ResultItem::new(element, closed.remaining, closed.position))
}

/// A single element with its content and end tag.
///
/// Only the first interpretation of the start tag and content is used, so an
/// element has at most one parse.
pub fn element() -> Parser<Element> {
    element_with(fragments())
}

fn element_with(children: Parser<Vec<Node>>) -> Parser<Element> {
    let start = start_tag();
    Parser::new(move |input, position| {
        match parse_element(&start, &children, input, position) {
            Ok(item) => ParseOutcome::Success(vec![item]),
            Err(failure) => ParseOutcome::Failure(failure),
        }
    })
}

/// Any sequence of text, elements and comments. Stops before the first
/// thing it cannot parse, such as an end tag.
///
/// Nested elements reuse the same grammar, built once on first use.
pub fn fragments() -> Parser<Vec<Node>> {
    recursive(|fragments| {
        many0(alt([
            token_of(&TEXT).map(Node::Text),
            element_with(fragments).map(Node::Element),
            comment(),
        ]))
    })
}

/// A `<template shadowrootmode="open">` element, possibly preceded by
/// whitespace and comments.
pub fn shadow_root() -> Parser<Vec<Node>> {
    let content = seq((spaces_and_comments(), element()));
    Parser::new(move |input, position| {
        content
            .parse_at(input, position)
            .and_then(|(mut nodes, template), remaining, end| {
                if template.tag_name != "template" {
                    return ParseOutcome::failure("Expected a template element", position);
                }
                if template.attribute("shadowrootmode") != Some("open") {
                    return ParseOutcome::failure("Expected a declarative shadow root", position);
                }
                nodes.push(Node::Element(template));
                ParseOutcome::single(nodes, remaining, end)
            })
    })
}

/// A whole document: the doctype and the root element, each possibly
/// surrounded by whitespace and comments.
pub fn document() -> Parser<Vec<Node>> {
    seq((
        spaces_and_comments(),
        doctype(),
        spaces_and_comments(),
        element(),
        spaces_and_comments(),
    ))
    .map(|(before, doctype, between, root, after)| {
        let mut nodes = before;
        nodes.push(doctype);
        nodes.extend(between);
        nodes.push(Node::Element(root));
        nodes.extend(after);
        nodes
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attr(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    fn el(tag_name: &str, attributes: Vec<(String, String)>, children: Vec<Node>) -> Node {
        Node::Element(Element::new(tag_name, attributes, children))
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comment_single_line() {
        assert_eq!(
            comment().parse_value("<!-- A simple comment -->"),
            Ok(Node::comment(" A simple comment "))
        );
    }

    #[test]
    fn test_comment_multi_line() {
        let source = "<!--\n     A\n     multiline\n     comment\n     -->";
        assert_eq!(
            comment().parse_value(source),
            Ok(Node::comment("\n     A\n     multiline\n     comment\n     "))
        );
    }

    #[test]
    fn test_comment_rejects_abrupt_close() {
        assert!(comment().parse_value("<!-->").is_err());
        assert!(comment().parse_value("<!--->").is_err());
    }

    #[test]
    fn test_consecutive_comments() {
        let source = "
    <!-- consecutive comments -->
    <!-- arrows ->-> -- > ->->->-- -> inside comments -->
  ";
        assert_eq!(
            spaces_and_comments().parse_value(source),
            Ok(vec![
                Node::text("\n    "),
                Node::comment(" consecutive comments "),
                Node::comment(" arrows ->-> -- > ->->->-- -> inside comments "),
                Node::text("\n  "),
            ])
        );
    }

    #[test]
    fn test_html_inside_comment() {
        assert_eq!(
            element().parse_value("<div><!-- <span>html inside comment</span> --></div>"),
            Ok(Element::new(
                "div",
                Vec::new(),
                vec![Node::comment(" <span>html inside comment</span> ")]
            ))
        );
    }

    #[test]
    fn test_nested_comments_and_elements() {
        let source = "
    <!-- This is a div -->
    <div>
      <p>
        Some text
        <!-- This is a button -->
        <button>click</button>
      </p>
      <p>
        <input type=\"checkbox\"> <!-- An input -->
      </p>
    </div>
    ";
        let first_p = el(
            "p",
            Vec::new(),
            vec![
                Node::text("\n        Some text\n        "),
                Node::comment(" This is a button "),
                Node::text("\n        "),
                el("button", Vec::new(), vec![Node::text("click")]),
                Node::text("\n      "),
            ],
        );
        let second_p = el(
            "p",
            Vec::new(),
            vec![
                Node::text("\n        "),
                el("input", vec![attr("type", "checkbox")], Vec::new()),
                Node::text(" "),
                Node::comment(" An input "),
                Node::text("\n      "),
            ],
        );

        assert_eq!(
            fragments().parse_value(source),
            Ok(vec![
                Node::text("\n    "),
                Node::comment(" This is a div "),
                Node::text("\n    "),
                el(
                    "div",
                    Vec::new(),
                    vec![
                        Node::text("\n      "),
                        first_p,
                        Node::text("\n      "),
                        second_p,
                        Node::text("\n    "),
                    ]
                ),
                Node::text("\n    "),
            ])
        );
    }

    // =========================================================================
    // Doctype and attributes
    // =========================================================================

    #[test]
    fn test_doctype_any_case() {
        assert_eq!(doctype().parse_value("<!Doctype Html >"), Ok(Node::text("<!DOCTYPE html>")));
        assert_eq!(
            doctype().parse_value("<!DOCTYPEhtml>").unwrap_err().message,
            "Expected a valid doctype"
        );
    }

    #[test]
    fn test_attributes() {
        assert_eq!(attribute().parse_value("value=yes"), Ok(attr("value", "yes")));
        assert_eq!(attribute().parse_value("type='text'"), Ok(attr("type", "text")));
        assert_eq!(attribute().parse_value("class=\"a b c\""), Ok(attr("class", "a b c")));
        assert_eq!(attribute().parse_value("checked"), Ok(attr("checked", "")));
        assert_eq!(attribute().parse_value("xml:lang=\"us\""), Ok(attr("xml:lang", "us")));
        assert_eq!(attribute().parse_value("CLASS = \"x\""), Ok(attr("class", "x")));
    }

    #[test]
    fn test_attribute_on_next_line() {
        assert_eq!(
            element().parse_value("<input\n    disabled\n    >"),
            Ok(Element::new("input", vec![attr("disabled", "")], Vec::new()))
        );
    }

    #[test]
    fn test_attributes_without_separating_whitespace() {
        assert_eq!(
            element().parse_value("<input value=\"yes\"class=\"a b c\">"),
            Ok(Element::new(
                "input",
                vec![attr("value", "yes"), attr("class", "a b c")],
                Vec::new()
            ))
        );
    }

    #[test]
    fn test_duplicate_attributes_are_kept() {
        assert_eq!(
            element().parse_value("<input @on=\"click:handleClick\" @on=\"mouseenter:handleHover\">"),
            Ok(Element::new(
                "input",
                vec![
                    attr("@on", "click:handleClick"),
                    attr("@on", "mouseenter:handleHover")
                ],
                Vec::new()
            ))
        );
    }

    // =========================================================================
    // Element kinds
    // =========================================================================

    #[test]
    fn test_void_elements() {
        assert_eq!(
            fragments().parse_value("<img src=\"something.png\"><br><input type=submit value=Ok />"),
            Ok(vec![
                el("img", vec![attr("src", "something.png")], Vec::new()),
                el("br", Vec::new(), Vec::new()),
                el("input", vec![attr("type", "submit"), attr("value", "Ok")], Vec::new()),
            ])
        );
    }

    #[test]
    fn test_self_closing_normal_element_fails() {
        let error = element().parse_value("<div/>").unwrap_err();
        assert_eq!(error.message, "Unexpected self-closing tag on a non-void element");
    }

    #[test]
    fn test_raw_text_style() {
        let source = "<style>\n  .box {\n    color: blue;\n  }\n</style>";
        let style = element().parse_value(source).unwrap();
        assert_eq!(style.kind, Kind::RawText);
        assert_eq!(style.children, vec![Node::text("\n  .box {\n    color: blue;\n  }\n")]);
    }

    #[test]
    fn test_raw_text_ignores_partial_end_tags() {
        let body = "\n  <\n  </\n  </s\n  </scrip\n  console.log(1 < 2);\n";
        let source = format!("<script>{body}</SCRIPT>");
        assert_eq!(
            element().parse_value(&source),
            Ok(Element::new("script", Vec::new(), vec![Node::text(body)]))
        );
    }

    #[test]
    fn test_raw_text_empty() {
        assert_eq!(
            element().parse_value("<script type=\"module\" src=\"/src/module.js\"></script>"),
            Ok(Element::new(
                "script",
                vec![attr("type", "module"), attr("src", "/src/module.js")],
                Vec::new()
            ))
        );
    }

    #[test]
    fn test_escapable_raw_text_keeps_markup() {
        let title = element().parse_value("<title>a <b> c</title>").unwrap();
        assert_eq!(title.kind, Kind::EscapableRawText);
        assert_eq!(title.children, vec![Node::text("a <b> c")]);
    }

    #[test]
    fn test_normal_elements() {
        assert_eq!(
            element().parse_value("<span class=\"icon\"></span>"),
            Ok(Element::new("span", vec![attr("class", "icon")], Vec::new()))
        );
        assert_eq!(
            element().parse_value("<P>lorem</p>"),
            Ok(Element::new("p", Vec::new(), vec![Node::text("lorem")]))
        );
    }

    #[test]
    fn test_deeply_nested_elements() {
        let nodes = fragments();
        let source = "<div><div><div><div><div><p>deep</p></div></div></div></div></div>";
        let mut expected = el("p", Vec::new(), vec![Node::text("deep")]);
        for _ in 0..5 {
            expected = el("div", Vec::new(), vec![expected]);
        }

        assert_eq!(nodes.parse_value(source), Ok(vec![expected.clone()]));
        assert_eq!(nodes.parse_value(source), Ok(vec![expected]));
    }

    #[test]
    fn test_missing_end_tag() {
        let error = element().parse_value("<p>lorem</div>").unwrap_err();
        assert_eq!(error.message, "Expected a '</p>' end tag");
        assert_eq!(error.column, 8);
    }

    #[test]
    fn test_custom_elements() {
        let source = "<something-different>\n  <atom-text-editor mini>\n    Hello\n  </atom-text-editor>\n</something-different>";
        let editor = Element::new(
            "atom-text-editor",
            vec![attr("mini", "")],
            vec![Node::text("\n    Hello\n  ")],
        );
        assert_eq!(editor.kind, Kind::Custom);
        assert_eq!(
            fragments().parse_value(source),
            Ok(vec![el(
                "something-different",
                Vec::new(),
                vec![Node::text("\n  "), Node::Element(editor), Node::text("\n")]
            )])
        );
    }

    #[test]
    fn test_entities_are_text() {
        assert_eq!(
            element().parse_value("<p>Named &nbsp; numeric &#160; hex &#xA0;</p>"),
            Ok(Element::new(
                "p",
                Vec::new(),
                vec![Node::text("Named &nbsp; numeric &#160; hex &#xA0;")]
            ))
        );
    }

    // =========================================================================
    // Documents
    // =========================================================================

    #[test]
    fn test_document() {
        let source = "<!-- top -->\n<!doctype html>\n<html><body>hi</body></html>\n";
        assert_eq!(
            document().parse_value(source),
            Ok(vec![
                Node::text(""),
                Node::comment(" top "),
                Node::text("\n"),
                Node::text("<!DOCTYPE html>"),
                Node::text("\n"),
                Node::text(""),
                el("html", Vec::new(), vec![el("body", Vec::new(), vec![Node::text("hi")])]),
                Node::text("\n"),
                Node::text(""),
            ])
        );
    }

    #[test]
    fn test_shadow_root() {
        let source = "<!-- host --><template shadowrootmode=\"open\"><slot></slot></template>";
        let nodes = shadow_root().parse_value(source).unwrap();
        assert_eq!(nodes.len(), 4);
        assert!(matches!(&nodes[3], Node::Element(template) if template.tag_name == "template"));

        assert_eq!(
            shadow_root().parse_value("<div></div>").unwrap_err().message,
            "Expected a template element"
        );
        assert_eq!(
            shadow_root().parse_value("<template></template>").unwrap_err().message,
            "Expected a declarative shadow root"
        );
    }

    // =========================================================================
    // Serialization round trips
    // =========================================================================

    #[test]
    fn test_serialize_round_trip() {
        let samples = [
            "text",
            "<!-- comment -->",
            "<span>no whitespace</span>",
            "<span>\n  <a href=\"#\">First</a>\n  <a href=\"#\">Second</a>\n</span>",
            "Hello, <a href=\"#\"> World </a>!",
            "<div>\n  <p>\n    <button>click</button>\n  </p>\n  <p>\n    <input type=\"checkbox\">\n  </p>\n</div>",
            "<pre>\n\nTwo newlines\n\n</pre>\n",
            "<pre>\nA space before the break\n </pre>\n",
        ];

        for sample in samples {
            let nodes = fragments().parse_value(sample).unwrap();
            assert_eq!(serialize_fragments(&nodes, SerializeOptions::default()), sample);
        }
    }

    #[test]
    fn test_serialize_without_comments() {
        let nodes = fragments().parse_value("<p>a<!-- b -->c</p>").unwrap();
        assert_eq!(
            serialize_fragments(&nodes, SerializeOptions { remove_comments: true }),
            "<p>ac</p>"
        );
    }
}
