// crates/displayer-rs-xml/src/node.rs

//! Minimal XML subtree representation shared by the displayer formats.
//!
//! Saved dashboard definitions hand each displayer format a sequence of child
//! nodes rather than raw text, so the formats can treat nested sections as
//! opaque subtrees. [`read_nodes`] builds that sequence from an XML fragment
//! using `quick-xml` events; text, entity references, CDATA and attribute
//! values are all decoded here, once, so downstream code only ever sees
//! plain content.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlFormatError;

/// One XML element: tag name, attributes, decoded text content and child
/// elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Whether the element has any content at all: child elements or
    /// non-empty text. Empty elements are skipped by every field parser.
    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty() || self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Decoded text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First attribute with the given name, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Reads an XML fragment into its sequence of top-level element nodes.
///
/// The fragment does not need a single root: a flat run of sibling elements
/// (the shape of a displayer subtree) is accepted as-is. Comments,
/// declarations and processing instructions are skipped.
///
/// # Errors
/// Returns an [`XmlFormatError`] if the fragment is not well-formed or its
/// escaped content cannot be decoded.
pub fn read_nodes(xml: &str) -> Result<Vec<XmlNode>, XmlFormatError> {
    let mut reader = Reader::from_str(xml);

    let mut roots: Vec<XmlNode> = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(node_from_start(&e)?);
            }
            Event::Empty(e) => {
                let node = node_from_start(&e)?;
                attach(node, &mut stack, &mut roots);
            }
            Event::Text(t) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(t.as_ref()).into_owned();
                    append_text(parent, &unescape(&raw)?);
                }
            }
            // The reader reports entity references between text fragments as
            // their own events; decode them through the same escape table as
            // inline text so `&amp;` and friends land in the node content.
            Event::GeneralRef(r) => {
                if let Some(parent) = stack.last_mut() {
                    let entity = format!("&{};", String::from_utf8_lossy(r.as_ref()));
                    append_text(parent, &unescape(&entity)?);
                }
            }
            // CDATA is already literal content; take it as text.
            Event::CData(t) => {
                if let Some(parent) = stack.last_mut() {
                    append_text(parent, &String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::End(_) => {
                if let Some(mut node) = stack.pop() {
                    trim_text(&mut node);
                    attach(node, &mut stack, &mut roots);
                }
            }
            Event::Eof => break,
            // Declarations, comments, PIs and the like carry no node data.
            _ => {}
        }
    }

    Ok(roots)
}

fn append_text(node: &mut XmlNode, fragment: &str) {
    match node.text.as_mut() {
        Some(existing) => existing.push_str(fragment),
        None => node.text = Some(fragment.to_owned()),
    }
}

/// Trims the assembled text once the element closes. Trimming fragment by
/// fragment would eat the whitespace around an entity reference, so the text
/// is only tidied here; whitespace-only content (formatting between child
/// elements) collapses back to no text at all.
fn trim_text(node: &mut XmlNode) {
    if let Some(text) = node.text.take() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            node.text = Some(trimmed.to_owned());
        }
    }
}

fn node_from_start(e: &BytesStart) -> Result<XmlNode, XmlFormatError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        attributes.push((key, unescape(&raw)?.into_owned()));
    }
    Ok(XmlNode {
        name,
        attributes,
        text: None,
        children: Vec::new(),
    })
}

fn attach(node: XmlNode, stack: &mut [XmlNode], roots: &mut Vec<XmlNode>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
