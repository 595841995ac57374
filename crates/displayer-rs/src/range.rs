//! Range sub-configuration: how values are aggregated and scaled.

use std::collections::BTreeMap;

/// Configuration of the range (value) axis of a chart.
///
/// Owned by a [`ChartDisplayer`](crate::ChartDisplayer) and replaced
/// wholesale on every parse/format cycle, carrying the scalar aggregation
/// function and the locale-keyed unit labels alongside the property id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeConfiguration {
    /// Identifier of the aggregated data property.
    pub property_id: String,
    /// Locale-keyed display names for the range.
    pub name_i18n: BTreeMap<String, String>,
    /// Scalar function applied to the property (e.g. "sum", "avg").
    pub scalar_function_code: String,
    /// Locale-keyed unit labels.
    pub unit_i18n: BTreeMap<String, String>,
}

impl RangeConfiguration {
    /// Rebuilds a range configuration from a displayer's current range
    /// property state. Used by the format direction right before delegating
    /// the `<range>` section.
    pub fn new(
        property_id: &str,
        scalar_function_code: &str,
        unit_i18n: BTreeMap<String, String>,
    ) -> Self {
        RangeConfiguration {
            property_id: property_id.into(),
            name_i18n: BTreeMap::new(),
            scalar_function_code: scalar_function_code.into(),
            unit_i18n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_carries_range_state() {
        let mut units = BTreeMap::new();
        units.insert("en".to_string(), "items".to_string());
        let config = RangeConfiguration::new("amount", "avg", units.clone());
        assert_eq!(config.property_id, "amount");
        assert_eq!(config.scalar_function_code, "avg");
        assert_eq!(config.unit_i18n, units);
        assert!(config.name_i18n.is_empty());
    }
}
