//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the parser tolerates what it must tolerate (missing
//! fields, empty elements, unknown tags, malformed booleans) and aborts on
//! what it must not (non-numeric integer fields, wrong displayer family),
//! without panicking.

use displayer_rs::{
    ChartDisplayer, ChartVariant, DataDisplayer, DomainConfiguration, SortCriteria, SortOrder,
    TableDisplayer,
};
use displayer_rs_xml::{ChartDisplayerXmlFormat, XmlFormatError, read_nodes};

/// A complete, valid displayer subtree used as a base for corrupted cases.
const SAMPLE_XML: &str = r#"
  <domain>
    <propertyid>department</propertyid>
    <name language="en">Department</name>
    <maxnumberofintervals>12</maxnumberofintervals>
  </domain>
  <range>
    <propertyid>amount</propertyid>
    <scalarfunction>avg</scalarfunction>
    <unit language="en">items</unit>
  </range>
  <type>barchart</type>
  <intervalsortcriteria>2</intervalsortcriteria>
  <intervalsortorder>-1</intervalsortorder>
  <showlabelsxaxis>false</showlabelsxaxis>
  <labelanglexaxis>45</labelanglexaxis>
  <showlinesarea>true</showlinesarea>
  <color>#FF0000</color>
  <backgroundcolor>#00FF00</backgroundcolor>
  <width>800</width>
  <height>450</height>
  <showlegend>true</showlegend>
  <axisinteger>true</axisinteger>
  <legendanchor>east</legendanchor>
  <showtitle>false</showtitle>
  <align>left</align>
  <marginleft>5</marginleft>
  <marginright>10</marginright>
  <margintop>15</margintop>
  <marginbottom>20</marginbottom>
"#;

fn parse_into(displayer: &mut DataDisplayer, xml: &str) -> Result<(), XmlFormatError> {
    let nodes = read_nodes(xml)?;
    ChartDisplayerXmlFormat::new().parse_displayer(displayer, &nodes)
}

/// The full sample populates every field of an axis-bearing displayer.
#[test]
fn test_parse_full_sample() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut displayer = DataDisplayer::Chart(ChartDisplayer::x_axis("linechart"));
    parse_into(&mut displayer, SAMPLE_XML).expect("Failed to parse sample");

    let chart = displayer.as_chart().unwrap();
    assert_eq!(chart.chart_type, "barchart");
    assert_eq!(chart.domain_configuration.property_id, "department");
    assert_eq!(chart.domain_configuration.max_number_of_intervals, 12);
    assert_eq!(chart.range_configuration.property_id, "amount");
    assert_eq!(chart.range_configuration.scalar_function_code, "avg");
    assert_eq!(
        chart.range_configuration.unit_i18n.get("en").map(String::as_str),
        Some("items")
    );
    assert_eq!(chart.intervals_sort_criteria, SortCriteria::Value);
    assert_eq!(chart.intervals_sort_order, SortOrder::Descending);
    assert!(!chart.show_labels_x_axis);
    let settings = chart.x_axis_settings().unwrap();
    assert_eq!(settings.label_angle_x_axis, 45);
    assert!(settings.show_lines_area);
    assert_eq!(chart.color, "#FF0000");
    assert_eq!(chart.width, 800);
    assert_eq!(chart.height, 450);
    assert!(chart.show_legend);
    assert!(chart.axis_integer);
    assert_eq!(chart.legend_anchor, "east");
    assert!(!chart.show_title);
    assert_eq!(chart.graphic_align, "left");
    assert_eq!(
        (chart.margin_left, chart.margin_right, chart.margin_top, chart.margin_bottom),
        (5, 10, 15, 20)
    );
}

/// Malformed boolean text coerces to `false` instead of raising.
#[test]
fn test_boolean_leniency() {
    let xml = SAMPLE_XML.replace("<showlegend>true</showlegend>", "<showlegend>yes</showlegend>");

    let mut displayer = DataDisplayer::Chart(ChartDisplayer::x_axis("barchart"));
    parse_into(&mut displayer, &xml).expect("Lenient boolean must not abort the parse");
    assert!(!displayer.as_chart().unwrap().show_legend);
}

/// Non-numeric integer text aborts the parse. Fields dispatched before the
/// corrupt element stay applied; fields after it are never touched.
#[test]
fn test_integer_strictness_and_partial_mutation() {
    let xml = SAMPLE_XML.replace("<width>800</width>", "<width>abc</width>");

    let mut displayer = DataDisplayer::Chart(ChartDisplayer::x_axis("linechart"));
    let result = parse_into(&mut displayer, &xml);
    assert!(
        matches!(
            result,
            Err(XmlFormatError::InvalidNumber { ref element, .. }) if element == "width"
        ),
        "Expected InvalidNumber for width, got {:?}",
        result
    );

    let chart = displayer.as_chart().unwrap();
    // <color> precedes <width> in the document and was already applied.
    assert_eq!(chart.color, "#FF0000");
    // <height> follows <width> and must still hold its default.
    assert_eq!(chart.height, ChartDisplayer::default().height);
}

/// Unknown elements among recognized ones are skipped without error.
#[test]
fn test_unknown_tag_tolerance() {
    let xml = SAMPLE_XML.replace(
        "<color>#FF0000</color>",
        "<foo>bar</foo><color>#FF0000</color>",
    );

    let mut displayer = DataDisplayer::Chart(ChartDisplayer::x_axis("barchart"));
    parse_into(&mut displayer, &xml).expect("Unknown tags must be ignored");
    assert_eq!(displayer.as_chart().unwrap().color, "#FF0000");
}

/// The axis-only tags are a no-op against a plain variant: not an error, and
/// the variant stays plain.
#[test]
fn test_axis_tags_ignored_on_plain_variant() {
    let mut displayer = DataDisplayer::Chart(ChartDisplayer::plain("piechart"));
    parse_into(&mut displayer, SAMPLE_XML).expect("Axis tags must be skippable");
    assert_eq!(displayer.as_chart().unwrap().variant, ChartVariant::Plain);
}

/// A plain variant never emits the axis-only tags.
#[test]
fn test_plain_variant_never_emits_axis_tags() {
    let format = ChartDisplayerXmlFormat::new();
    let mut displayer = DataDisplayer::Chart(ChartDisplayer::plain("piechart"));
    let mut out = String::new();
    format.format_displayer(&mut displayer, &mut out, 0).unwrap();
    assert!(!out.contains("labelanglexaxis"));
    assert!(!out.contains("showlinesarea"));
}

/// Sort order NONE suppresses the criteria/order pair; any other order emits
/// both.
#[test]
fn test_sort_pair_is_conditional() {
    let format = ChartDisplayerXmlFormat::new();

    let mut chart = ChartDisplayer::plain("piechart");
    chart.intervals_sort_order = SortOrder::None;
    let mut displayer = DataDisplayer::Chart(chart);
    let mut out = String::new();
    format.format_displayer(&mut displayer, &mut out, 0).unwrap();
    assert!(!out.contains("intervalsortcriteria"));
    assert!(!out.contains("intervalsortorder"));

    let mut chart = ChartDisplayer::plain("piechart");
    chart.intervals_sort_order = SortOrder::Ascending;
    let mut displayer = DataDisplayer::Chart(chart);
    let mut out = String::new();
    format.format_displayer(&mut displayer, &mut out, 0).unwrap();
    assert!(out.contains("<intervalsortcriteria>1</intervalsortcriteria>"));
    assert!(out.contains("<intervalsortorder>1</intervalsortorder>"));
}

/// A displayer of the wrong family is refused by both directions, and the
/// formatter writes nothing.
#[test]
fn test_structural_mismatch() {
    let format = ChartDisplayerXmlFormat::new();
    let mut displayer = DataDisplayer::Table(TableDisplayer::default());

    let mut out = String::new();
    let result = format.format_displayer(&mut displayer, &mut out, 0);
    assert!(
        matches!(result, Err(XmlFormatError::UnsupportedDisplayer { kind: "table" })),
        "Expected UnsupportedDisplayer, got {:?}",
        result
    );
    assert!(out.is_empty(), "No output may be written on mismatch");

    let nodes = read_nodes("<width>300</width>").unwrap();
    let result = format.parse_displayer(&mut displayer, &nodes);
    assert!(matches!(
        result,
        Err(XmlFormatError::UnsupportedDisplayer { kind: "table" })
    ));
}

/// Absent or childless domain/range sections leave the existing
/// sub-configurations untouched.
#[test]
fn test_missing_sections_leave_subconfigurations() {
    let mut chart = ChartDisplayer::plain("piechart");
    chart.domain_configuration = DomainConfiguration::from_property("sentinel");
    let expected = chart.domain_configuration.clone();
    let mut displayer = DataDisplayer::Chart(chart);

    parse_into(&mut displayer, "<width>500</width><domain></domain>").unwrap();
    let chart = displayer.as_chart().unwrap();
    assert_eq!(chart.width, 500);
    assert_eq!(chart.domain_configuration, expected);
}

/// Empty recognized elements are skipped, leaving defaults in place.
#[test]
fn test_empty_elements_are_skipped() {
    let mut displayer = DataDisplayer::Chart(ChartDisplayer::plain("piechart"));
    parse_into(&mut displayer, "<type></type><width></width><color/>").unwrap();

    let defaults = ChartDisplayer::default();
    let chart = displayer.as_chart().unwrap();
    assert_eq!(chart.chart_type, "piechart");
    assert_eq!(chart.width, defaults.width);
    assert_eq!(chart.color, defaults.color);
}

/// Errors from the nested section delegate propagate unchanged.
#[test]
fn test_section_errors_propagate() {
    let xml = SAMPLE_XML.replace(
        "<maxnumberofintervals>12</maxnumberofintervals>",
        "<maxnumberofintervals>lots</maxnumberofintervals>",
    );

    let mut displayer = DataDisplayer::Chart(ChartDisplayer::x_axis("barchart"));
    let result = parse_into(&mut displayer, &xml);
    assert!(
        matches!(
            result,
            Err(XmlFormatError::InvalidNumber { ref element, .. }) if element == "maxnumberofintervals"
        ),
        "Expected delegate error to surface, got {:?}",
        result
    );
}
