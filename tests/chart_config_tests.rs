use highcharts_graph::api::{
    AlignmentMode, Chart, ChartConfig, DEFAULT_LIBRARY_VERSION, LibraryConfig, Preset,
};
use highcharts_graph::core::{EmptyValuePolicy, OptionValue};

#[test]
fn chart_config_json_roundtrip() {
    let config = ChartConfig::new("Rates")
        .with_subtitle("EUR")
        .with_preset(Preset::FastLine)
        .with_empty_value_policy(EmptyValuePolicy::MissingOnly)
        .with_alignment(AlignmentMode::Strict)
        .with_library(LibraryConfig::default().with_local_fallback("/static/hc.js"));

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = ChartConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
    assert!(json.contains("\"preset\": \"fastline\""));
}

#[test]
fn minimal_config_fills_defaults() {
    let config = ChartConfig::from_json_str(r#"{ "title": "Only title" }"#).expect("parse");

    assert_eq!(config.subtitle, None);
    assert_eq!(config.preset, Preset::Default);
    assert_eq!(config.empty_value_policy, EmptyValuePolicy::ZeroIsEmpty);
    assert_eq!(config.alignment, AlignmentMode::ByName);
    assert_eq!(config.library.version, DEFAULT_LIBRARY_VERSION);
    assert_eq!(config.library.local_fallback_path, None);
}

#[test]
fn unknown_preset_name_falls_back_to_default() {
    let config =
        ChartConfig::from_json_str(r#"{ "title": "t", "preset": "area" }"#).expect("parse");
    assert_eq!(config.preset, Preset::Default);

    let config =
        ChartConfig::from_json_str(r#"{ "title": "t", "preset": "FASTLINE" }"#).expect("parse");
    assert_eq!(config.preset, Preset::FastLine);
}

#[test]
fn missing_title_is_rejected() {
    assert!(ChartConfig::from_json_str(r#"{ "preset": "spline" }"#).is_err());
}

#[test]
fn from_config_applies_title_and_preset() {
    let chart = Chart::from_config(ChartConfig::new("Rates").with_preset(Preset::FastLine));

    assert_eq!(
        chart.option("chart.type").and_then(OptionValue::as_str),
        Some("line")
    );
    assert_eq!(chart.config().preset, Preset::FastLine);
}

#[test]
fn library_script_url_trims_trailing_slash() {
    let library = LibraryConfig::default().with_cdn_base("https://code.highcharts.com/");
    assert_eq!(
        library.script_url(),
        "https://code.highcharts.com/4.1.6/highcharts.js"
    );
}
