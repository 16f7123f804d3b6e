//! XML writing utilities for the SpreadsheetML parts of an OOXML package.
//! Provides an XML writer wrapper with convenience methods for elements and text.

use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Writer;
use thiserror::Error;

/// Errors specific to XML writing operations
#[derive(Error, Debug)]
pub(crate) enum XmlError {
    #[error("Write XML event failed: {0}")]
    WriteEventError(String),
}

/// XML writer wrapper producing an in-memory SpreadsheetML document
pub(crate) struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Creates a new XML writer backed by a growable buffer
    pub(crate) fn new() -> XmlWriter {
        XmlWriter {
            writer: Writer::new(Vec::with_capacity(1024)),
        }
    }

    /// Writes the XML declaration expected at the top of every part
    pub(crate) fn declaration(&mut self) -> Result<(), XmlError> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
    }

    /// Opens an element with the given attributes
    pub(crate) fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), XmlError> {
        self.emit(Event::Start(element(name, attributes)))
    }

    /// Writes a self-closed element with the given attributes
    pub(crate) fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), XmlError> {
        self.emit(Event::Empty(element(name, attributes)))
    }

    /// Writes escaped text content inside the current element
    pub(crate) fn text(&mut self, value: &str) -> Result<(), XmlError> {
        self.emit(Event::Text(BytesText::new(value)))
    }

    /// Closes an element opened with `start`
    pub(crate) fn end(&mut self, name: &str) -> Result<(), XmlError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// Consumes the writer and returns the serialized document bytes
    pub(crate) fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), XmlError> {
        self.writer
            .write_event(event)
            .map_err(|error| XmlError::WriteEventError(error.to_string()))
    }
}

/// Builds an element start tag with its attributes attached
fn element<'a>(name: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    start
}
