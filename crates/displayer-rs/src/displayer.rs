//! The displayer family.

use crate::chart::ChartDisplayer;
use crate::table::TableDisplayer;

/// A data displayer of any supported family.
///
/// The tag makes family checks a pure data inspection: an XML format asked to
/// handle the wrong family reports the mismatch instead of probing types.
#[derive(Debug, Clone, PartialEq)]
pub enum DataDisplayer {
    Chart(ChartDisplayer),
    Table(TableDisplayer),
}

impl DataDisplayer {
    /// Stable family name, used in error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            DataDisplayer::Chart(_) => "chart",
            DataDisplayer::Table(_) => "table",
        }
    }

    pub fn as_chart(&self) -> Option<&ChartDisplayer> {
        match self {
            DataDisplayer::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn as_chart_mut(&mut self) -> Option<&mut ChartDisplayer> {
        match self {
            DataDisplayer::Chart(chart) => Some(chart),
            _ => None,
        }
    }
}
