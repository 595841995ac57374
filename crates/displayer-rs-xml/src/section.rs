// crates/displayer-rs-xml/src/section.rs

//! Nested `<domain>` and `<range>` section codecs.
//!
//! The chart format treats both sections as opaque subtrees owned by a
//! [`SectionCodec`]: the codec decides their internal vocabulary and element
//! order, the chart format only decides where the containers sit.

use std::collections::BTreeMap;

use displayer_rs::{DomainConfiguration, RangeConfiguration};
use log::trace;

use crate::error::XmlFormatError;
use crate::node::XmlNode;
use crate::writer::{write_localized_element, write_text_element};

/// Codec for the domain/range sub-documents of a displayer definition.
///
/// Errors raised here propagate unchanged through the chart format to its
/// caller; the chart format performs no wrapping of delegate failures.
pub trait SectionCodec {
    /// Parses the child nodes of a `<domain>` element.
    fn parse_domain(&self, nodes: &[XmlNode]) -> Result<DomainConfiguration, XmlFormatError>;

    /// Writes the child elements of a `<domain>` element at `indent`.
    fn format_domain(
        &self,
        config: &DomainConfiguration,
        out: &mut String,
        indent: usize,
    ) -> Result<(), XmlFormatError>;

    /// Parses the child nodes of a `<range>` element.
    fn parse_range(&self, nodes: &[XmlNode]) -> Result<RangeConfiguration, XmlFormatError>;

    /// Writes the child elements of a `<range>` element at `indent`.
    fn format_range(
        &self,
        config: &RangeConfiguration,
        out: &mut String,
        indent: usize,
    ) -> Result<(), XmlFormatError>;
}

/// Stock section codec for the standard dashboard schema.
///
/// Domain sections hold `<propertyid>`, locale-attributed `<name>` elements
/// and `<maxnumberofintervals>`; range sections hold `<propertyid>`,
/// locale-attributed `<name>` elements, `<scalarfunction>` and
/// locale-attributed `<unit>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSectionCodec;

impl SectionCodec for StandardSectionCodec {
    fn parse_domain(&self, nodes: &[XmlNode]) -> Result<DomainConfiguration, XmlFormatError> {
        let mut config = DomainConfiguration::default();
        for node in nodes {
            if !node.has_child_nodes() {
                continue;
            }
            match node.name.as_str() {
                "propertyid" => {
                    if let Some(text) = node.text() {
                        config.property_id = text.to_string();
                    }
                }
                "name" => insert_localized(&mut config.name_i18n, node),
                "maxnumberofintervals" => {
                    if let Some(text) = node.text() {
                        config.max_number_of_intervals = parse_int(&node.name, text)?;
                    }
                }
                other => trace!("Ignoring unrecognized domain tag <{}>", other),
            }
        }
        Ok(config)
    }

    fn format_domain(
        &self,
        config: &DomainConfiguration,
        out: &mut String,
        indent: usize,
    ) -> Result<(), XmlFormatError> {
        write_text_element(out, indent, "propertyid", &config.property_id)?;
        for (language, name) in &config.name_i18n {
            write_localized_element(out, indent, "name", language, name)?;
        }
        write_text_element(
            out,
            indent,
            "maxnumberofintervals",
            &config.max_number_of_intervals.to_string(),
        )?;
        Ok(())
    }

    fn parse_range(&self, nodes: &[XmlNode]) -> Result<RangeConfiguration, XmlFormatError> {
        let mut config = RangeConfiguration::default();
        for node in nodes {
            if !node.has_child_nodes() {
                continue;
            }
            match node.name.as_str() {
                "propertyid" => {
                    if let Some(text) = node.text() {
                        config.property_id = text.to_string();
                    }
                }
                "name" => insert_localized(&mut config.name_i18n, node),
                "scalarfunction" => {
                    if let Some(text) = node.text() {
                        config.scalar_function_code = text.to_string();
                    }
                }
                "unit" => insert_localized(&mut config.unit_i18n, node),
                other => trace!("Ignoring unrecognized range tag <{}>", other),
            }
        }
        Ok(config)
    }

    fn format_range(
        &self,
        config: &RangeConfiguration,
        out: &mut String,
        indent: usize,
    ) -> Result<(), XmlFormatError> {
        write_text_element(out, indent, "propertyid", &config.property_id)?;
        for (language, name) in &config.name_i18n {
            write_localized_element(out, indent, "name", language, name)?;
        }
        write_text_element(out, indent, "scalarfunction", &config.scalar_function_code)?;
        for (language, unit) in &config.unit_i18n {
            write_localized_element(out, indent, "unit", language, unit)?;
        }
        Ok(())
    }
}

/// Stores a locale-attributed element into an i18n map. Elements without a
/// `language` attribute or without text are skipped.
fn insert_localized(map: &mut BTreeMap<String, String>, node: &XmlNode) {
    if let (Some(language), Some(text)) = (node.attribute("language"), node.text()) {
        map.insert(language.to_string(), text.to_string());
    }
}

pub(crate) fn parse_int(element: &str, text: &str) -> Result<i32, XmlFormatError> {
    text.parse().map_err(|source| XmlFormatError::InvalidNumber {
        element: element.to_string(),
        value: text.to_string(),
        source,
    })
}
