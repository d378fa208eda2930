use highcharts_graph::api::{Chart, Preset};
use highcharts_graph::core::json_writer::map_to_json_string;
use highcharts_graph::core::{OptionMap, OptionValue, RawExpression, map_from_json_str};
use serde_json::json;

#[test]
fn raw_expression_is_unquoted_while_equal_string_stays_quoted() {
    let expr = "Highcharts.getOptions().colors[0]";
    let mut options = OptionMap::new();
    options.insert("color".to_owned(), OptionValue::from(RawExpression::new(expr)));
    options.insert("label".to_owned(), OptionValue::from(expr));

    let text = map_to_json_string(&options).expect("serialize");

    assert_eq!(
        text,
        r#"{"color":Highcharts.getOptions().colors[0],"label":"Highcharts.getOptions().colors[0]"}"#
    );
}

#[test]
fn overlapping_raw_expressions_do_not_interfere() {
    let options = OptionValue::Seq(vec![
        OptionValue::raw("colors[1]"),
        OptionValue::raw("colors[10]"),
        OptionValue::from("colors[1]"),
    ]);

    let text = options.to_json_string().expect("serialize");
    assert_eq!(text, r#"[colors[1],colors[10],"colors[1]"]"#);
}

#[test]
fn tree_without_raw_expressions_round_trips() {
    let tree = OptionValue::from(json!({
        "title": { "text": "Rates \"quoted\" \u{00e9}" },
        "chart": { "type": "spline", "height": 300, "spacing": [10, 10.5, -3] },
        "legend": { "enabled": false, "title": null },
        "series": [{ "data": [1.25, null, 3] }]
    }));
    assert!(!tree.contains_raw());

    let compact = tree.to_json_string().expect("compact");
    let pretty = tree.to_json_string_pretty().expect("pretty");

    assert_eq!(OptionValue::from_json_str(&compact).expect("parse"), tree);
    assert_eq!(OptionValue::from_json_str(&pretty).expect("parse"), tree);
}

#[test]
fn floats_parse_back_to_the_exact_written_value() {
    let values = [971986.3718547629, 11935.154727148345, 1.0715660391465826e-75];
    let tree = OptionValue::Seq(values.iter().copied().map(OptionValue::from).collect());

    let text = tree.to_json_string().expect("compact");
    let parsed = OptionValue::from_json_str(&text).expect("parse");

    assert_eq!(parsed, tree);
    for (item, expected) in parsed.as_seq().expect("sequence").iter().zip(values) {
        assert_eq!(item.as_f64().map(f64::to_bits), Some(expected.to_bits()));
    }
}

#[test]
fn writer_matches_serde_json_for_plain_trees() {
    let source = json!({
        "a": [1, 2.5, "x", true, null],
        "b": { "nested": { "deep": "value" } }
    });
    let tree = OptionValue::from(source.clone());

    assert_eq!(
        tree.to_json_string().expect("compact"),
        serde_json::to_string(&source).expect("serde compact")
    );
    assert_eq!(
        tree.to_json_string_pretty().expect("pretty"),
        serde_json::to_string_pretty(&source).expect("serde pretty")
    );
}

#[test]
fn serde_view_degrades_raw_expressions_to_strings() {
    let mut options = OptionMap::new();
    options.insert("formatter".to_owned(), OptionValue::raw("function () { return this.y; }"));

    let plain = serde_json::to_string(&OptionValue::Map(options)).expect("serde");
    assert_eq!(plain, r#"{"formatter":"function () { return this.y; }"}"#);
}

#[test]
fn rendered_chart_options_contain_unquoted_palette_colors() {
    let mut chart = Chart::new("USD rate", None, Preset::Default);
    chart.apply_options(json!({ "subtitle": { "text": "Highcharts.getOptions().colors[0]" } }));
    chart.add_point("2015-05-01", [("PayIn", 111.0), ("PayOut", 222.0)]);
    chart.add_point("2015-05-02", [("PayIn", 1111.0), ("PayOut", 2222.0)]);

    let text = chart.render_options(true).expect("render");

    assert!(text.contains(r#""color":Highcharts.getOptions().colors[0]"#));
    assert!(text.contains(r#""color":Highcharts.getOptions().colors[1]"#));
    assert!(text.contains(r#""subtitle":{"text":"Highcharts.getOptions().colors[0]"}"#));
    assert!(text.starts_with(r#"{"title":{"text":"USD rate"}"#));
    assert!(text.contains(r#""categories":["2015-05-01","2015-05-02"]"#));
    assert!(text.contains(r#""data":[111.0,1111.0]"#));
}

#[test]
fn json_object_parses_into_fragment_map() {
    let map = map_from_json_str(r#"{"chart":{"type":"line"},"xAxis":[{}]}"#).expect("object");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["chart", "xAxis"]);
}
