//! Typed XML tree parsing and text-run collection.
//!
//! OOXML parts are parsed into an explicit node tree, and a depth-first
//! visitor collects the text of every run element in document order. The
//! run tag is format-specific (`w:t` for Word, `a:t` for DrawingML), so
//! the collector takes it as a parameter.

use docask_core::{Error, Result};
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed XML node.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// An element with its qualified tag, attributes, and children.
    Element {
        /// Qualified tag name as written in the source, e.g. `w:t`.
        tag: String,
        /// Attribute key/value pairs in source order.
        attributes: Vec<(String, String)>,
        /// Child nodes in document order.
        children: Vec<XmlNode>,
    },
    /// Literal character data.
    Text(String),
}

impl XmlNode {
    /// Synthetic root wrapping the document's top-level nodes.
    fn root() -> Self {
        XmlNode::Element {
            tag: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Parse an XML document into a tree.
///
/// The returned node is a synthetic root whose children are the document's
/// top-level nodes; inter-element whitespace is dropped.
pub fn parse_tree(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlNode> = vec![XmlNode::root()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from(e));
            }
            Ok(Event::Empty(ref e)) => {
                let node = element_from(e);
                push_child(&mut stack, node)?;
            }
            Ok(Event::Text(ref e)) => {
                let value = e
                    .unescape()
                    .map_err(|err| Error::Xml(err.to_string()))?
                    .into_owned();
                push_child(&mut stack, XmlNode::Text(value))?;
            }
            Ok(Event::CData(ref e)) => {
                let value = String::from_utf8_lossy(e).into_owned();
                push_child(&mut stack, XmlNode::Text(value))?;
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(node) if !stack.is_empty() => push_child(&mut stack, node)?,
                _ => return Err(Error::Xml("unbalanced closing tag".to_string())),
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e.to_string())),
        }
    }

    if stack.len() != 1 {
        return Err(Error::Xml("unexpected end of document".to_string()));
    }
    stack
        .pop()
        .ok_or_else(|| Error::Xml("empty document".to_string()))
}

/// Collect the text of every element whose qualified tag equals `run_tag`,
/// in depth-first, left-to-right order.
///
/// An empty run element contributes an empty string; non-run elements are
/// traversed but never emitted.
pub fn collect_runs(node: &XmlNode, run_tag: &str) -> Vec<String> {
    let mut runs = Vec::new();
    visit(node, run_tag, &mut runs);
    runs
}

fn visit(node: &XmlNode, run_tag: &str, runs: &mut Vec<String>) {
    if let XmlNode::Element { tag, children, .. } = node {
        if tag == run_tag {
            runs.push(immediate_text(children));
            return;
        }
        for child in children {
            visit(child, run_tag, runs);
        }
    }
}

/// Concatenated text children of an element; empty when it has none.
fn immediate_text(children: &[XmlNode]) -> String {
    let mut out = String::new();
    for child in children {
        if let XmlNode::Text(value) = child {
            out.push_str(value);
        }
    }
    out
}

/// Append `node` as a child of the element currently on top of the stack.
fn push_child(stack: &mut Vec<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(XmlNode::Element { children, .. }) => {
            children.push(node);
            Ok(())
        }
        _ => Err(Error::Xml("no open element to attach node to".to_string())),
    }
}

fn element_from(e: &BytesStart) -> XmlNode {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes().flatten() {
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attr.value).into_owned(),
        ));
    }

    XmlNode::Element {
        tag,
        attributes,
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let tree = parse_tree("<a><b>one</b><c><b>two</b></c></a>").unwrap();
        assert_eq!(collect_runs(&tree, "b"), vec!["one", "two"]);
    }

    #[test]
    fn test_collect_runs_in_document_order() {
        let tree = parse_tree("<p><r><t>first</t></r><r><t>second</t></r><t>third</t></p>").unwrap();
        assert_eq!(collect_runs(&tree, "t"), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_reordered_children_change_output() {
        let forward = parse_tree("<p><t>a</t><t>b</t></p>").unwrap();
        let reversed = parse_tree("<p><t>b</t><t>a</t></p>").unwrap();
        assert_eq!(collect_runs(&forward, "t"), vec!["a", "b"]);
        assert_eq!(collect_runs(&reversed, "t"), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_run_element_yields_empty_string() {
        let tree = parse_tree("<p><t/><t>x</t></p>").unwrap();
        assert_eq!(collect_runs(&tree, "t"), vec!["", "x"]);
    }

    #[test]
    fn test_qualified_tags_are_matched_exactly() {
        let tree = parse_tree("<w:p><w:t>word</w:t><a:t>drawing</a:t></w:p>").unwrap();
        assert_eq!(collect_runs(&tree, "w:t"), vec!["word"]);
        assert_eq!(collect_runs(&tree, "a:t"), vec!["drawing"]);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let tree = parse_tree("<p><t>a &amp; b</t></p>").unwrap();
        assert_eq!(collect_runs(&tree, "t"), vec!["a & b"]);
    }

    #[test]
    fn test_attributes_are_kept() {
        let tree = parse_tree(r#"<p><t xml:space="preserve">x</t></p>"#).unwrap();
        let XmlNode::Element { children, .. } = &tree else {
            panic!("root must be an element");
        };
        let XmlNode::Element { children: p, .. } = &children[0] else {
            panic!("p must be an element");
        };
        let XmlNode::Element { attributes, .. } = &p[0] else {
            panic!("t must be an element");
        };
        assert_eq!(attributes[0], ("xml:space".to_string(), "preserve".to_string()));
    }

    #[test]
    fn test_unbalanced_document_is_an_error() {
        let err = parse_tree("<a><b>text</a>").unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }
}
