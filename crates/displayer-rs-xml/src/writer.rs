// crates/displayer-rs-xml/src/writer.rs

//! Pretty-printing helpers shared by the displayer formats.
//!
//! Output goes into a caller-supplied `String` buffer; the caller owns the
//! sink and decides what wraps the emitted subtree. Text content is escaped
//! on every write, matching the symmetric unescape in [`crate::read_nodes`].

use core::fmt::Write;

use quick_xml::escape::escape;

use crate::error::XmlFormatError;

/// Two spaces per indentation level.
const INDENT: &str = "  ";

/// Writes leading whitespace for the given indentation level.
pub fn print_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
}

/// Writes one leaf element with escaped text content on its own line.
pub fn write_text_element(
    out: &mut String,
    indent: usize,
    tag: &str,
    value: &str,
) -> Result<(), XmlFormatError> {
    print_indent(out, indent);
    writeln!(out, "<{}>{}</{}>", tag, escape(value), tag)?;
    Ok(())
}

/// Writes one leaf element carrying a `language` attribute, used by the
/// locale-keyed elements of the domain/range sections.
pub fn write_localized_element(
    out: &mut String,
    indent: usize,
    tag: &str,
    language: &str,
    value: &str,
) -> Result<(), XmlFormatError> {
    print_indent(out, indent);
    writeln!(
        out,
        "<{} language=\"{}\">{}</{}>",
        tag,
        escape(language),
        escape(value),
        tag
    )?;
    Ok(())
}

/// Opens a container element on its own line.
pub fn open_element(out: &mut String, indent: usize, tag: &str) -> Result<(), XmlFormatError> {
    print_indent(out, indent);
    writeln!(out, "<{}>", tag)?;
    Ok(())
}

/// Closes a container element on its own line.
pub fn close_element(out: &mut String, indent: usize, tag: &str) -> Result<(), XmlFormatError> {
    print_indent(out, indent);
    writeln!(out, "</{}>", tag)?;
    Ok(())
}
