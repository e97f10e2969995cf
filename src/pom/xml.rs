//! Minimal element tree over the quick-xml event reader.
//!
//! Descriptors are small, so the whole document is materialized as nested
//! [`XmlElement`]s. Tag names are stored as lowercased local names (namespace prefixes
//! dropped), which gives the case-insensitive, direct-child matching the parser needs.
//! Attributes, comments, processing instructions and the doctype are ignored.

use crate::core::PomError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element with its direct text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Lowercased local name.
    pub name: String,
    /// Concatenated, trimmed, unescaped text directly inside the element (CDATA included).
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// First direct child named `name` (case-insensitive).
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        let name = name.to_lowercase();
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children named `name` (case-insensitive), in document order.
    pub fn children_named(&self, name: &str) -> impl Iterator<Item = &XmlElement> {
        let name = name.to_lowercase();
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first direct child named `name`, or an empty string.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name).map(|c| c.text.clone()).unwrap_or_default()
    }

    /// Whether the element contains only text.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Parse a document and return its root element.
///
/// Mismatched end tags and malformed markup surface as [`PomError::XmlError`]; a
/// document with no element at all is a [`PomError::DescriptorParseError`].
pub fn parse_document(content: &str) -> Result<XmlElement, PomError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(XmlElement::new(element_name(&start))),
            Event::Empty(start) => {
                attach(&mut stack, &mut root, XmlElement::new(element_name(&start)));
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(PomError::DescriptorParseError {
            file: String::new(),
            reason: format!("unclosed element <{}>", open.name),
        });
    }

    root.ok_or_else(|| PomError::DescriptorParseError {
        file: String::new(),
        reason: "document has no root element".to_string(),
    })
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).to_lowercase()
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            // Only the first top-level element counts
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
