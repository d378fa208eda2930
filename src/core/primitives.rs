use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub const CATEGORY_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a decimal string (e.g. `"65.4312"`) into a plotted value.
pub fn parse_decimal_str(input: &str, field_name: &str) -> ChartResult<f64> {
    let decimal = Decimal::from_str(input.trim()).map_err(|e| {
        ChartError::InvalidData(format!("{field_name} is not a decimal number: {e}"))
    })?;
    decimal_to_f64(decimal, field_name)
}

#[must_use]
pub fn date_to_category(date: NaiveDate) -> String {
    date.format(CATEGORY_DATE_FORMAT).to_string()
}
