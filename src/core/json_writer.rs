//! JSON text output for option trees.
//!
//! Scalars go through `serde_json` so escaping and float formatting match
//! the plain serde path. `Raw` leaves are copied verbatim, which is the only
//! way an expression reaches the charting library unquoted.

use crate::error::{ChartError, ChartResult};

use super::{OptionMap, OptionValue};

const PRETTY_INDENT: &str = "  ";

pub fn to_json_string(value: &OptionValue) -> ChartResult<String> {
    let mut out = String::new();
    write_value(&mut out, value, None, 0)?;
    Ok(out)
}

pub fn to_json_string_pretty(value: &OptionValue) -> ChartResult<String> {
    let mut out = String::new();
    write_value(&mut out, value, Some(PRETTY_INDENT), 0)?;
    Ok(out)
}

/// Compact JSON for a mapping root.
pub fn map_to_json_string(map: &OptionMap) -> ChartResult<String> {
    let mut out = String::new();
    write_map(&mut out, map, None, 0)?;
    Ok(out)
}

fn write_value(
    out: &mut String,
    value: &OptionValue,
    indent: Option<&str>,
    depth: usize,
) -> ChartResult<()> {
    match value {
        OptionValue::Null => out.push_str("null"),
        OptionValue::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        OptionValue::Int(int) => out.push_str(&int.to_string()),
        OptionValue::Float(float) if float.into_inner().is_finite() => {
            out.push_str(&encode_scalar(&float.into_inner())?);
        }
        OptionValue::Float(_) => out.push_str("null"),
        OptionValue::Str(text) => out.push_str(&encode_scalar(text)?),
        OptionValue::Raw(expr) => out.push_str(expr.as_str()),
        OptionValue::Seq(items) => write_seq(out, items, indent, depth)?,
        OptionValue::Map(map) => write_map(out, map, indent, depth)?,
    }
    Ok(())
}

fn write_seq(
    out: &mut String,
    items: &[OptionValue],
    indent: Option<&str>,
    depth: usize,
) -> ChartResult<()> {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(out, indent, depth + 1);
        write_value(out, item, indent, depth + 1)?;
    }
    newline(out, indent, depth);
    out.push(']');
    Ok(())
}

fn write_map(
    out: &mut String,
    map: &OptionMap,
    indent: Option<&str>,
    depth: usize,
) -> ChartResult<()> {
    if map.is_empty() {
        out.push_str("{}");
        return Ok(());
    }

    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(out, indent, depth + 1);
        out.push_str(&encode_scalar(key)?);
        out.push(':');
        if indent.is_some() {
            out.push(' ');
        }
        write_value(out, value, indent, depth + 1)?;
    }
    newline(out, indent, depth);
    out.push('}');
    Ok(())
}

fn newline(out: &mut String, indent: Option<&str>, depth: usize) {
    if let Some(unit) = indent {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(unit);
        }
    }
}

fn encode_scalar<T: serde::Serialize + ?Sized>(value: &T) -> ChartResult<String> {
    serde_json::to_string(value)
        .map_err(|e| ChartError::InvalidData(format!("failed to encode json scalar: {e}")))
}
