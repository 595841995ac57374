//! Parses and formats dashboard chart displayer XML definitions.
//!
//! This library maps the chart displayer configuration model from
//! `displayer-rs` to and from the flat child-element subtree stored in saved
//! dashboard definitions:
//!
//! - [`read_nodes`]: reading an XML fragment into a child-node sequence.
//! - [`ChartDisplayerXmlFormat::parse_displayer`]: populating a displayer
//!   from a node sequence, tolerating missing and unknown elements.
//! - [`ChartDisplayerXmlFormat::format_displayer`]: emitting the equivalent
//!   subtree in a fixed, stable element order.
//!
//! The nested `<domain>` and `<range>` sections are delegated to a
//! [`SectionCodec`]; [`StandardSectionCodec`] is the stock implementation.

// --- Crate Modules ---

mod chart;
mod error;
mod node;
mod section;
mod writer;

// --- Public API Re-exports ---

pub use chart::ChartDisplayerXmlFormat;
pub use error::XmlFormatError;
pub use node::{XmlNode, read_nodes};
pub use section::{SectionCodec, StandardSectionCodec};
pub use writer::{
    close_element, open_element, print_indent, write_localized_element, write_text_element,
};
