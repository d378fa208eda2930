use highcharts_graph::api::{Chart, ChartConfig, Preset};
use highcharts_graph::core::parse_decimal_str;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: highcharts_html --input <rows.json> --category <field> \
[--config <chart.json>] [--title <text>] [--preset <default|spline|fastline>] \
[--target <element-id>] [--local-library <path>] [--page]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    category_field: String,
    config: Option<PathBuf>,
    title: Option<String>,
    preset: Option<Preset>,
    target: String,
    local_library: Option<String>,
    full_page: bool,
}

fn main() {
    let _ = highcharts_graph::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = read_file(path)?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::new(args.title.clone().unwrap_or_default()),
    };
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(preset) = args.preset {
        config.preset = preset;
    }
    if let Some(path) = &args.local_library {
        config.library.local_fallback_path = Some(path.clone());
    }

    let raw = read_file(&args.input)?;
    let rows: Vec<serde_json::Map<String, Value>> =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json rows: {err}"))?;

    let mut chart = Chart::from_config(config);
    for (index, row) in rows.into_iter().enumerate() {
        let (category, values) = split_row(row, &args.category_field)
            .map_err(|err| format!("row {index}: {err}"))?;
        chart.add_point(category, values);
    }

    let snippet = chart
        .render_html(&args.target)
        .map_err(|err| err.to_string())?;
    if args.full_page {
        println!("{}", wrap_page(&chart.config().title, &args.target, &snippet));
    } else {
        println!("{snippet}");
    }
    Ok(())
}

fn split_row(
    mut row: serde_json::Map<String, Value>,
    category_field: &str,
) -> Result<(String, Vec<(String, Option<f64>)>), String> {
    let category = match row.remove(category_field) {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => return Err(format!("category `{category_field}` is not a label: {other}")),
        None => return Err(format!("missing category field `{category_field}`")),
    };

    let values = row
        .into_iter()
        .map(|(name, value)| -> Result<(String, Option<f64>), String> {
            let parsed = match &value {
                Value::Null => None,
                Value::Number(number) => number.as_f64(),
                Value::String(text) => {
                    Some(parse_decimal_str(text, &name).map_err(|err| err.to_string())?)
                }
                other => return Err(format!("field `{name}` is not numeric: {other}")),
            };
            Ok((name, parsed))
        })
        .collect::<Result<Vec<_>, String>>()?;
    Ok((category, values))
}

fn wrap_page(title: &str, target: &str, snippet: &str) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n\
         <script src=\"//ajax.googleapis.com/ajax/libs/jquery/2.0.0/jquery.min.js\"></script>\n\
         </head>\n<body>\n\
         <div id=\"{target}\" style=\"min-width: 400px; height: 400px; margin: 0 auto\"></div>\n\
         {snippet}\n</body>\n</html>"
    )
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut category_field = None::<String>;
    let mut config = None::<PathBuf>;
    let mut title = None::<String>;
    let mut preset = None::<Preset>;
    let mut target = "container".to_owned();
    let mut local_library = None::<String>;
    let mut full_page = false;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--category" => category_field = Some(value("--category")?),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--title" => title = Some(value("--title")?),
            "--preset" => preset = Some(Preset::from_name(&value("--preset")?)),
            "--target" => target = value("--target")?,
            "--local-library" => local_library = Some(value("--local-library")?),
            "--page" => full_page = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        category_field: category_field.ok_or_else(|| USAGE.to_owned())?,
        config,
        title,
        preset,
        target,
        local_library,
        full_page,
    })
}
