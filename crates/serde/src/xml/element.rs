//! A minimal XML element tree and its writer.
//!
//! Documents are assembled as [`Element`] trees first and written in one pass
//! with quick-xml, so a failure while building never leaves half a document
//! behind.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::xml::utils::XML_DECLARATION;

/// An XML element with ordered attributes, optional text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates an element holding only text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the element text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Appends an attribute.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends an empty child and returns it for further building.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    fn is_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty) && self.children.is_empty()
    }
}

/// Writes `root` as a complete document.
///
/// The output starts with `<?xml version="1.0"?>` and a newline and ends with
/// a newline. With `pretty` set, nested elements are indented by two spaces.
///
/// ```
/// use rendition_serde::xml::{Element, write_document};
///
/// let mut root = Element::new("root");
/// root.push(Element::with_text("name", "Alex"));
///
/// let xml = write_document(&root, false).unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\"?>\n<root><name>Alex</name></root>\n");
/// ```
pub fn write_document(root: &Element, pretty: bool) -> Result<String> {
    let buffer = XML_DECLARATION.as_bytes().to_vec();
    let mut writer = if pretty {
        Writer::new_with_indent(buffer, b' ', 2)
    } else {
        Writer::new(buffer)
    };

    write_element(&mut writer, root)?;

    let mut buffer = writer.into_inner();
    buffer.push(b'\n');
    Ok(String::from_utf8(buffer)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;

    Ok(())
}
