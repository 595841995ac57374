// crates/displayer-rs-xml/src/error.rs

use core::fmt;
use core::num::ParseIntError;
use quick_xml::Error as XmlError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;

/// Errors that can occur while parsing or formatting displayer XML.
#[derive(Debug)]
pub enum XmlFormatError {
    /// The XML fragment could not be read into a node tree.
    XmlReading(XmlError),

    /// An element attribute was malformed.
    Attribute(AttrError),

    /// Escaped text content could not be decoded.
    Unescape(EscapeError),

    /// An integer-valued element held non-numeric text. Fatal to the current
    /// parse call; boolean elements by contrast coerce silently to `false`.
    InvalidNumber {
        element: String,
        value: String,
        source: ParseIntError,
    },

    /// The displayer handed in does not belong to the chart family.
    UnsupportedDisplayer { kind: &'static str },

    /// The output sink rejected a write.
    FmtError(fmt::Error),
}

impl From<XmlError> for XmlFormatError {
    fn from(e: XmlError) -> Self {
        XmlFormatError::XmlReading(e)
    }
}

impl From<AttrError> for XmlFormatError {
    fn from(e: AttrError) -> Self {
        XmlFormatError::Attribute(e)
    }
}

impl From<EscapeError> for XmlFormatError {
    fn from(e: EscapeError) -> Self {
        XmlFormatError::Unescape(e)
    }
}

impl From<fmt::Error> for XmlFormatError {
    fn from(e: fmt::Error) -> Self {
        XmlFormatError::FmtError(e)
    }
}

impl fmt::Display for XmlFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlFormatError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            XmlFormatError::Attribute(e) => write!(f, "XML attribute error: {}", e),
            XmlFormatError::Unescape(e) => write!(f, "XML unescape error: {}", e),
            XmlFormatError::InvalidNumber {
                element,
                value,
                source,
            } => write!(
                f,
                "Invalid numeric content {:?} in element <{}>: {}",
                value, element, source
            ),
            XmlFormatError::UnsupportedDisplayer { kind } => {
                write!(f, "Can not format non-chart displayers: {}", kind)
            }
            XmlFormatError::FmtError(e) => write!(f, "Formatting error: {}", e),
        }
    }
}

impl std::error::Error for XmlFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XmlFormatError::XmlReading(e) => Some(e),
            XmlFormatError::Attribute(e) => Some(e),
            XmlFormatError::Unescape(e) => Some(e),
            XmlFormatError::InvalidNumber { source, .. } => Some(source),
            XmlFormatError::UnsupportedDisplayer { .. } => None,
            XmlFormatError::FmtError(e) => Some(e),
        }
    }
}
