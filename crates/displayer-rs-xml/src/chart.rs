// crates/displayer-rs-xml/src/chart.rs

//! Chart displayer XML parsing and formatting services.
//!
//! A chart displayer is stored as a flat sequence of named child elements
//! under a displayer root (the root itself is owned by the caller):
//!
//! ```xml
//! <chartdisplayer>
//!   <width>300</width>
//!   <height>200</height>
//! </chartdisplayer>
//! ```
//!
//! Both directions dispatch through one scalar field registry so the set of
//! tags the parser recognizes and the set the formatter emits cannot drift
//! apart. The two axis-only tags live in a second registry consulted only for
//! axis-bearing chart variants.

use displayer_rs::{
    ChartDisplayer, DataDisplayer, DomainConfiguration, RangeConfiguration, SortCriteria,
    SortOrder, XAxisSettings,
};
use log::trace;

use crate::error::XmlFormatError;
use crate::node::XmlNode;
use crate::section::{SectionCodec, StandardSectionCodec, parse_int};
use crate::writer::{close_element, open_element, write_text_element};

/// Scalar fields shared by every chart displayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarField {
    Type,
    SortCriteria,
    SortOrder,
    ShowLabelsXAxis,
    Color,
    BackgroundColor,
    Width,
    Height,
    ShowLegend,
    AxisInteger,
    LegendAnchor,
    ShowTitle,
    Align,
    MarginLeft,
    MarginRight,
    MarginTop,
    MarginBottom,
}

/// Tag registry for the scalar fields. Parse dispatch looks tags up here and
/// the formatter derives every leaf tag from [`ScalarField::tag`], keeping
/// the two directions symmetric by construction.
const SCALAR_FIELDS: &[ScalarField] = &[
    ScalarField::Type,
    ScalarField::SortCriteria,
    ScalarField::SortOrder,
    ScalarField::ShowLabelsXAxis,
    ScalarField::Color,
    ScalarField::BackgroundColor,
    ScalarField::Width,
    ScalarField::Height,
    ScalarField::ShowLegend,
    ScalarField::AxisInteger,
    ScalarField::LegendAnchor,
    ScalarField::ShowTitle,
    ScalarField::Align,
    ScalarField::MarginLeft,
    ScalarField::MarginRight,
    ScalarField::MarginTop,
    ScalarField::MarginBottom,
];

/// The always-emitted trailing block, in schema order.
const TRAILING_FIELDS: &[ScalarField] = &[
    ScalarField::Color,
    ScalarField::BackgroundColor,
    ScalarField::Width,
    ScalarField::Height,
    ScalarField::ShowLegend,
    ScalarField::AxisInteger,
    ScalarField::LegendAnchor,
    ScalarField::ShowTitle,
    ScalarField::Align,
    ScalarField::MarginLeft,
    ScalarField::MarginRight,
    ScalarField::MarginTop,
    ScalarField::MarginBottom,
];

impl ScalarField {
    fn tag(self) -> &'static str {
        match self {
            ScalarField::Type => "type",
            ScalarField::SortCriteria => "intervalsortcriteria",
            ScalarField::SortOrder => "intervalsortorder",
            ScalarField::ShowLabelsXAxis => "showlabelsxaxis",
            ScalarField::Color => "color",
            ScalarField::BackgroundColor => "backgroundcolor",
            ScalarField::Width => "width",
            ScalarField::Height => "height",
            ScalarField::ShowLegend => "showlegend",
            ScalarField::AxisInteger => "axisinteger",
            ScalarField::LegendAnchor => "legendanchor",
            ScalarField::ShowTitle => "showtitle",
            ScalarField::Align => "align",
            ScalarField::MarginLeft => "marginleft",
            ScalarField::MarginRight => "marginright",
            ScalarField::MarginTop => "margintop",
            ScalarField::MarginBottom => "marginbottom",
        }
    }

    /// Applies decoded element text to the displayer through this field's
    /// codec. Integer fields abort the parse on bad text; boolean fields
    /// coerce silently (see [`parse_bool`]).
    fn apply(self, displayer: &mut ChartDisplayer, text: &str) -> Result<(), XmlFormatError> {
        match self {
            ScalarField::Type => displayer.chart_type = text.to_string(),
            ScalarField::SortCriteria => {
                displayer.intervals_sort_criteria =
                    SortCriteria::from_code(parse_int(self.tag(), text)?);
            }
            ScalarField::SortOrder => {
                displayer.intervals_sort_order = SortOrder::from_code(parse_int(self.tag(), text)?);
            }
            ScalarField::ShowLabelsXAxis => displayer.show_labels_x_axis = parse_bool(text),
            ScalarField::Color => displayer.color = text.to_string(),
            ScalarField::BackgroundColor => displayer.background_color = text.to_string(),
            ScalarField::Width => displayer.width = parse_int(self.tag(), text)?,
            ScalarField::Height => displayer.height = parse_int(self.tag(), text)?,
            ScalarField::ShowLegend => displayer.show_legend = parse_bool(text),
            ScalarField::AxisInteger => displayer.axis_integer = parse_bool(text),
            ScalarField::LegendAnchor => displayer.legend_anchor = text.to_string(),
            ScalarField::ShowTitle => displayer.show_title = parse_bool(text),
            ScalarField::Align => displayer.graphic_align = text.to_string(),
            ScalarField::MarginLeft => displayer.margin_left = parse_int(self.tag(), text)?,
            ScalarField::MarginRight => displayer.margin_right = parse_int(self.tag(), text)?,
            ScalarField::MarginTop => displayer.margin_top = parse_int(self.tag(), text)?,
            ScalarField::MarginBottom => displayer.margin_bottom = parse_int(self.tag(), text)?,
        }
        Ok(())
    }

    /// Canonical text for this field's current value: decimal for integers,
    /// "true"/"false" for booleans, pass-through for strings.
    fn value(self, displayer: &ChartDisplayer) -> String {
        match self {
            ScalarField::Type => displayer.chart_type.clone(),
            ScalarField::SortCriteria => displayer.intervals_sort_criteria.code().to_string(),
            ScalarField::SortOrder => displayer.intervals_sort_order.code().to_string(),
            ScalarField::ShowLabelsXAxis => displayer.show_labels_x_axis.to_string(),
            ScalarField::Color => displayer.color.clone(),
            ScalarField::BackgroundColor => displayer.background_color.clone(),
            ScalarField::Width => displayer.width.to_string(),
            ScalarField::Height => displayer.height.to_string(),
            ScalarField::ShowLegend => displayer.show_legend.to_string(),
            ScalarField::AxisInteger => displayer.axis_integer.to_string(),
            ScalarField::LegendAnchor => displayer.legend_anchor.clone(),
            ScalarField::ShowTitle => displayer.show_title.to_string(),
            ScalarField::Align => displayer.graphic_align.clone(),
            ScalarField::MarginLeft => displayer.margin_left.to_string(),
            ScalarField::MarginRight => displayer.margin_right.to_string(),
            ScalarField::MarginTop => displayer.margin_top.to_string(),
            ScalarField::MarginBottom => displayer.margin_bottom.to_string(),
        }
    }
}

/// Fields present only on axis-bearing chart variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisField {
    LabelAngle,
    ShowLinesArea,
}

/// Secondary registry for the axis-only field group. Both directions gate on
/// the displayer variant, never on an independent flag.
const AXIS_FIELDS: &[AxisField] = &[AxisField::LabelAngle, AxisField::ShowLinesArea];

impl AxisField {
    fn tag(self) -> &'static str {
        match self {
            AxisField::LabelAngle => "labelanglexaxis",
            AxisField::ShowLinesArea => "showlinesarea",
        }
    }

    fn apply(self, settings: &mut XAxisSettings, text: &str) -> Result<(), XmlFormatError> {
        match self {
            AxisField::LabelAngle => settings.label_angle_x_axis = parse_int(self.tag(), text)?,
            AxisField::ShowLinesArea => settings.show_lines_area = parse_bool(text),
        }
        Ok(())
    }

    fn value(self, settings: &XAxisSettings) -> String {
        match self {
            AxisField::LabelAngle => settings.label_angle_x_axis.to_string(),
            AxisField::ShowLinesArea => settings.show_lines_area.to_string(),
        }
    }
}

fn scalar_field(tag: &str) -> Option<ScalarField> {
    SCALAR_FIELDS.iter().copied().find(|field| field.tag() == tag)
}

fn axis_field(tag: &str) -> Option<AxisField> {
    AXIS_FIELDS.iter().copied().find(|field| field.tag() == tag)
}

/// `Boolean.parseBoolean`-style leniency kept for legacy documents: only a
/// case-insensitive "true" reads as true, any other text reads as false.
fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Bidirectional XML mapping for chart displayer configurations.
///
/// The nested `<domain>` and `<range>` sections are delegated to the codec
/// `C`; everything else dispatches through the scalar and axis registries.
#[derive(Debug, Clone, Default)]
pub struct ChartDisplayerXmlFormat<C = StandardSectionCodec> {
    sections: C,
}

impl ChartDisplayerXmlFormat<StandardSectionCodec> {
    /// A format using the stock domain/range section codec.
    pub fn new() -> Self {
        ChartDisplayerXmlFormat {
            sections: StandardSectionCodec,
        }
    }
}

impl<C: SectionCodec> ChartDisplayerXmlFormat<C> {
    /// A format delegating the domain/range sections to `sections`.
    pub fn with_sections(sections: C) -> Self {
        ChartDisplayerXmlFormat { sections }
    }

    /// Parses a child-node sequence into `displayer`, mutating recognized
    /// fields in place.
    ///
    /// Absent fields, empty elements and unknown tags are skipped without
    /// error; the two axis-only tags are additionally skipped when the target
    /// is not an axis-bearing variant. Non-numeric text in an integer field
    /// aborts the parse; fields applied before the failure point stay
    /// applied.
    ///
    /// # Errors
    /// [`XmlFormatError::UnsupportedDisplayer`] if `displayer` is not a chart
    /// displayer, [`XmlFormatError::InvalidNumber`] for corrupt integer
    /// fields, and nested section errors propagated unchanged.
    pub fn parse_displayer(
        &self,
        displayer: &mut DataDisplayer,
        nodes: &[XmlNode],
    ) -> Result<(), XmlFormatError> {
        let chart = match displayer {
            DataDisplayer::Chart(chart) => chart,
            other => {
                return Err(XmlFormatError::UnsupportedDisplayer { kind: other.kind() });
            }
        };
        for node in nodes {
            self.parse_node(chart, node)?;
        }
        Ok(())
    }

    fn parse_node(
        &self,
        displayer: &mut ChartDisplayer,
        node: &XmlNode,
    ) -> Result<(), XmlFormatError> {
        if !node.has_child_nodes() {
            return Ok(());
        }
        if node.name == "domain" {
            displayer.domain_configuration = self.sections.parse_domain(&node.children)?;
        } else if node.name == "range" {
            displayer.range_configuration = self.sections.parse_range(&node.children)?;
        } else if let Some(field) = scalar_field(&node.name) {
            if let Some(text) = node.text() {
                field.apply(displayer, text)?;
            }
        } else if let Some(field) = axis_field(&node.name) {
            match displayer.x_axis_settings_mut() {
                Some(settings) => {
                    if let Some(text) = node.text() {
                        field.apply(settings, text)?;
                    }
                }
                None => trace!(
                    "Ignoring x-axis tag <{}> on a non-axis chart displayer",
                    node.name
                ),
            }
        } else {
            trace!("Ignoring unrecognized displayer tag <{}>", node.name);
        }
        Ok(())
    }

    /// Formats `displayer` as an ordered child-element sequence, written into
    /// `out` at the given indentation level. The displayer root element is
    /// the caller's to write.
    ///
    /// As a documented side effect, the chart's domain and range
    /// sub-configurations are rebuilt from its current property state
    /// (`domain_property`, `range_property`, `range_scalar_function`,
    /// `unit_i18n`) right before the nested sections are delegated; the
    /// chart's other fields are only read.
    ///
    /// # Errors
    /// [`XmlFormatError::UnsupportedDisplayer`] if `displayer` is not a chart
    /// displayer (nothing is written in that case), and nested section errors
    /// propagated unchanged.
    pub fn format_displayer(
        &self,
        displayer: &mut DataDisplayer,
        out: &mut String,
        indent: usize,
    ) -> Result<(), XmlFormatError> {
        let chart = match displayer {
            DataDisplayer::Chart(chart) => chart,
            other => {
                return Err(XmlFormatError::UnsupportedDisplayer { kind: other.kind() });
            }
        };

        // Domain: rebuilt from the current domain property, then delegated.
        open_element(out, indent, "domain")?;
        chart.domain_configuration = DomainConfiguration::from_property(&chart.domain_property);
        self.sections
            .format_domain(&chart.domain_configuration, out, indent + 1)?;
        close_element(out, indent, "domain")?;

        // Range: same rebuild, carrying the scalar function and unit labels.
        open_element(out, indent, "range")?;
        chart.range_configuration = RangeConfiguration::new(
            &chart.range_property,
            &chart.range_scalar_function,
            chart.unit_i18n.clone(),
        );
        self.sections
            .format_range(&chart.range_configuration, out, indent + 1)?;
        close_element(out, indent, "range")?;

        write_scalar(out, indent, ScalarField::Type, chart)?;

        // The sort pair travels together; order NONE suppresses both.
        if chart.intervals_sort_order != SortOrder::None {
            write_scalar(out, indent, ScalarField::SortCriteria, chart)?;
            write_scalar(out, indent, ScalarField::SortOrder, chart)?;
        }

        write_scalar(out, indent, ScalarField::ShowLabelsXAxis, chart)?;

        // X-axis label properties, only for axis-bearing variants.
        if let Some(settings) = chart.x_axis_settings() {
            for field in AXIS_FIELDS {
                write_text_element(out, indent, field.tag(), &field.value(settings))?;
            }
        }

        for field in TRAILING_FIELDS {
            write_scalar(out, indent, *field, chart)?;
        }

        Ok(())
    }
}

fn write_scalar(
    out: &mut String,
    indent: usize,
    field: ScalarField,
    displayer: &ChartDisplayer,
) -> Result<(), XmlFormatError> {
    write_text_element(out, indent, field.tag(), &field.value(displayer))
}
