use highcharts_graph::ChartError;
use highcharts_graph::core::{OptionMap, OptionValue, lookup_path, merge, try_merge};
use serde_json::json;

fn map(value: serde_json::Value) -> OptionMap {
    OptionValue::from(value)
        .into_map()
        .expect("fixture should be a json object")
}

#[test]
fn scalar_leaf_is_right_biased() {
    let mut base = map(json!({ "a": 1 }));
    merge(&mut base, map(json!({ "a": 2 })));
    assert_eq!(base, map(json!({ "a": 2 })));
}

#[test]
fn nested_mappings_merge_recursively() {
    let mut base = map(json!({ "a": { "b": 1 } }));
    merge(&mut base, map(json!({ "a": { "c": 2 } })));
    assert_eq!(base, map(json!({ "a": { "b": 1, "c": 2 } })));
}

#[test]
fn scalar_replaces_mapping() {
    let mut base = map(json!({ "a": { "b": 1 } }));
    merge(&mut base, map(json!({ "a": 5 })));
    assert_eq!(base, map(json!({ "a": 5 })));
}

#[test]
fn mapping_replaces_scalar() {
    let mut base = map(json!({ "a": 5 }));
    merge(&mut base, map(json!({ "a": { "b": 1 } })));
    assert_eq!(base, map(json!({ "a": { "b": 1 } })));
}

#[test]
fn sequences_are_replaced_wholesale() {
    let mut base = map(json!({ "xAxis": [{ "crosshair": true }, { "title": "t" }] }));
    merge(&mut base, map(json!({ "xAxis": [{ "type": "datetime" }] })));

    let axes = lookup_path(&base, "xAxis")
        .and_then(OptionValue::as_seq)
        .expect("sequence");
    assert_eq!(axes.len(), 1);
    assert!(lookup_path(&base, "xAxis.0.crosshair").is_none());
}

#[test]
fn base_only_keys_and_order_are_preserved() {
    let mut base = map(json!({ "title": { "text": "A" }, "chart": { "type": "spline" } }));
    merge(&mut base, map(json!({ "chart": { "type": "line" }, "legend": { "enabled": false } })));

    let keys: Vec<&str> = base.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "chart", "legend"]);
    assert_eq!(
        lookup_path(&base, "chart.type").and_then(OptionValue::as_str),
        Some("line")
    );
}

#[test]
fn deep_nesting_is_supported() {
    let mut base = map(json!({ "a": { "b": { "c": { "d": { "e": 1 } } } } }));
    merge(&mut base, map(json!({ "a": { "b": { "c": { "d": { "f": 2 } } } } })));

    assert_eq!(
        lookup_path(&base, "a.b.c.d.e").and_then(OptionValue::as_i64),
        Some(1)
    );
    assert_eq!(
        lookup_path(&base, "a.b.c.d.f").and_then(OptionValue::as_i64),
        Some(2)
    );
}

#[test]
fn merging_same_fragment_twice_is_idempotent() {
    let fragment = map(json!({ "plotOptions": { "series": { "marker": { "enabled": true } } } }));
    let mut once = map(json!({ "plotOptions": { "series": { "animation": false } } }));
    merge(&mut once, fragment.clone());
    let mut twice = once.clone();
    merge(&mut twice, fragment);

    assert_eq!(once, twice);
}

#[test]
fn strict_merge_reports_path_of_shape_collision() {
    let mut base = map(json!({ "plotOptions": { "series": { "marker": { "enabled": false } } } }));
    let before = base.clone();

    let err = try_merge(
        &mut base,
        map(json!({ "chart": { "type": "line" }, "plotOptions": { "series": { "marker": true } } })),
    )
    .expect_err("mapping replaced by scalar should fail");

    match err {
        ChartError::InvalidFragmentShape {
            path,
            existing,
            incoming,
        } => {
            assert_eq!(path, "plotOptions.series.marker");
            assert_eq!(existing, "mapping");
            assert_eq!(incoming, "bool");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(base, before, "strict merge must not partially apply");
}

#[test]
fn strict_merge_rejects_mapping_over_scalar() {
    let mut base = map(json!({ "title": "plain" }));
    let result = try_merge(&mut base, map(json!({ "title": { "text": "nested" } })));
    assert!(matches!(
        result,
        Err(ChartError::InvalidFragmentShape { .. })
    ));
}

#[test]
fn strict_merge_accepts_compatible_fragments_and_null_slots() {
    let mut base = map(json!({ "a": { "b": 1 }, "n": null, "s": [1, 2] }));
    try_merge(
        &mut base,
        map(json!({ "a": { "c": 2 }, "n": { "x": true }, "s": "replaced" })),
    )
    .expect("compatible fragment");

    assert_eq!(
        base,
        map(json!({ "a": { "b": 1, "c": 2 }, "n": { "x": true }, "s": "replaced" }))
    );
}
