//! Chart displayer configuration: the object the XML mapping parses into and
//! formats from.

use std::collections::BTreeMap;

use log::warn;

use crate::domain::DomainConfiguration;
use crate::range::RangeConfiguration;

/// Sort order applied to domain intervals before display.
///
/// `None` disables sorting entirely and suppresses the sort criteria element
/// in the XML wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Stable integer code used by the XML wire format.
    pub fn code(self) -> i32 {
        match self {
            SortOrder::None => 0,
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

    /// Decodes a wire code. Unknown codes fall back to `None`.
    pub fn from_code(code: i32) -> SortOrder {
        match code {
            0 => SortOrder::None,
            1 => SortOrder::Ascending,
            -1 => SortOrder::Descending,
            other => {
                warn!("Unknown intervals sort order code {other}, using NONE");
                SortOrder::None
            }
        }
    }
}

/// Criterion used to order domain intervals. Only meaningful while the sort
/// order is not [`SortOrder::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    /// Order intervals by their label.
    #[default]
    Label,
    /// Order intervals by their aggregated value.
    Value,
}

impl SortCriteria {
    /// Stable integer code used by the XML wire format.
    pub fn code(self) -> i32 {
        match self {
            SortCriteria::Label => 1,
            SortCriteria::Value => 2,
        }
    }

    /// Decodes a wire code. Unknown codes fall back to `Label`.
    pub fn from_code(code: i32) -> SortCriteria {
        match code {
            1 => SortCriteria::Label,
            2 => SortCriteria::Value,
            other => {
                warn!("Unknown intervals sort criteria code {other}, using LABEL");
                SortCriteria::Label
            }
        }
    }
}

/// Extra properties carried only by charts with a labeled X axis
/// (bar, line, area). Pie-style charts have no use for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XAxisSettings {
    /// Rotation of the X-axis labels, in degrees.
    pub label_angle_x_axis: i32,
    /// Whether the plot area is overlaid with guide lines.
    pub show_lines_area: bool,
}

/// Discriminates the chart displayer subtype.
///
/// The variant is fixed when the displayer is created and never inferred from
/// field contents, so both XML directions gate the axis-only fields on the
/// same data inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartVariant {
    /// A chart without a labeled X axis (e.g. pie).
    Plain,
    /// An axis-bearing chart, unlocking the [`XAxisSettings`] field group.
    XAxis(XAxisSettings),
}

/// Configuration of a single chart displayer.
///
/// The object is created with defaults and then mutated in place by the XML
/// parse direction; the format direction reads it back. The nested
/// `domain_configuration` and `range_configuration` sub-objects are never
/// mutated incrementally: parsing a `<domain>`/`<range>` section replaces
/// them wholesale, and formatting rebuilds them from the raw property state
/// (`domain_property`, `range_property`, `range_scalar_function`,
/// `unit_i18n`) before delegating.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDisplayer {
    /// Chart kind discriminator (e.g. "barchart", "piechart").
    pub chart_type: String,
    /// Identifier of the data property the domain groups by.
    pub domain_property: String,
    /// Identifier of the data property the range aggregates.
    pub range_property: String,
    /// Scalar function applied to the range property (e.g. "sum").
    pub range_scalar_function: String,
    /// Locale-keyed unit labels for the range.
    pub unit_i18n: BTreeMap<String, String>,
    /// Derived domain sub-configuration; swapped, never edited in place.
    pub domain_configuration: DomainConfiguration,
    /// Derived range sub-configuration; swapped, never edited in place.
    pub range_configuration: RangeConfiguration,
    pub show_labels_x_axis: bool,
    pub intervals_sort_criteria: SortCriteria,
    pub intervals_sort_order: SortOrder,
    /// Foreground color token (hex or named), stored opaque.
    pub color: String,
    /// Background color token (hex or named), stored opaque.
    pub background_color: String,
    /// Pixel width. Bounds are a caller concern.
    pub width: i32,
    /// Pixel height. Bounds are a caller concern.
    pub height: i32,
    pub show_legend: bool,
    /// Whether axis ticks are constrained to integers.
    pub axis_integer: bool,
    pub legend_anchor: String,
    pub show_title: bool,
    pub graphic_align: String,
    pub margin_left: i32,
    pub margin_right: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
    /// Subtype discriminator; see [`ChartVariant`].
    pub variant: ChartVariant,
}

impl Default for ChartDisplayer {
    fn default() -> Self {
        ChartDisplayer {
            chart_type: String::from("barchart"),
            domain_property: String::new(),
            range_property: String::new(),
            range_scalar_function: String::from("sum"),
            unit_i18n: BTreeMap::new(),
            domain_configuration: DomainConfiguration::default(),
            range_configuration: RangeConfiguration::default(),
            show_labels_x_axis: true,
            intervals_sort_criteria: SortCriteria::default(),
            intervals_sort_order: SortOrder::default(),
            color: String::from("#FFFFFF"),
            background_color: String::from("#FFFFFF"),
            width: 600,
            height: 300,
            show_legend: false,
            axis_integer: false,
            legend_anchor: String::from("south"),
            show_title: true,
            graphic_align: String::from("center"),
            margin_left: 30,
            margin_right: 30,
            margin_top: 30,
            margin_bottom: 30,
            variant: ChartVariant::Plain,
        }
    }
}

impl ChartDisplayer {
    /// Creates a plain (non-axis) displayer of the given chart kind.
    pub fn plain(chart_type: &str) -> Self {
        ChartDisplayer {
            chart_type: chart_type.into(),
            ..ChartDisplayer::default()
        }
    }

    /// Creates an axis-bearing displayer of the given chart kind, with
    /// default x-axis settings.
    pub fn x_axis(chart_type: &str) -> Self {
        ChartDisplayer {
            chart_type: chart_type.into(),
            variant: ChartVariant::XAxis(XAxisSettings::default()),
            ..ChartDisplayer::default()
        }
    }

    /// Whether this displayer carries the x-axis label field group.
    pub fn is_x_axis(&self) -> bool {
        matches!(self.variant, ChartVariant::XAxis(_))
    }

    /// Axis settings, if this is an axis-bearing variant.
    pub fn x_axis_settings(&self) -> Option<&XAxisSettings> {
        match &self.variant {
            ChartVariant::XAxis(settings) => Some(settings),
            ChartVariant::Plain => None,
        }
    }

    /// Mutable axis settings, if this is an axis-bearing variant.
    pub fn x_axis_settings_mut(&mut self) -> Option<&mut XAxisSettings> {
        match &mut self.variant {
            ChartVariant::XAxis(settings) => Some(settings),
            ChartVariant::Plain => None,
        }
    }
}
