//! Domain sub-configuration: how the displayed data is grouped into
//! intervals.

use std::collections::BTreeMap;

/// Configuration of the domain (grouping) axis of a chart.
///
/// Owned by a [`ChartDisplayer`](crate::ChartDisplayer) and replaced
/// wholesale on every parse/format cycle rather than mutated field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainConfiguration {
    /// Identifier of the grouped data property.
    pub property_id: String,
    /// Locale-keyed display names for the domain.
    pub name_i18n: BTreeMap<String, String>,
    /// Upper bound on the number of intervals the domain is split into.
    pub max_number_of_intervals: i32,
}

impl Default for DomainConfiguration {
    fn default() -> Self {
        DomainConfiguration {
            property_id: String::new(),
            name_i18n: BTreeMap::new(),
            max_number_of_intervals: 10,
        }
    }
}

impl DomainConfiguration {
    /// Rebuilds a domain configuration from a displayer's current domain
    /// property. Used by the format direction right before delegating the
    /// `<domain>` section.
    pub fn from_property(property_id: &str) -> Self {
        DomainConfiguration {
            property_id: property_id.into(),
            ..DomainConfiguration::default()
        }
    }
}
