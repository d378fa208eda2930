use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Dataset, EmptyValuePolicy, OptionMap, OptionValue, RawExpression, set_path};
use crate::error::{ChartError, ChartResult};

/// How rows with differing series sets are flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Series are matched by name; a series missing from a row yields `null`.
    #[default]
    ByName,
    /// Every row must list the same series in the same order as the first row.
    Strict,
}

/// One flattened series: one value slot per category.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Axis categories plus per-series columns, ready to merge into options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesLayout {
    pub categories: Vec<String>,
    pub series: Vec<SeriesColumn>,
}

/// Palette lookup evaluated by the charting library at render time.
#[must_use]
pub fn palette_color_expression(index: usize) -> RawExpression {
    RawExpression::new(format!("Highcharts.getOptions().colors[{index}]"))
}

/// Drops every series that has no non-empty value in any row.
///
/// Only present cells are inspected: a series absent from a row does not
/// count as empty there.
#[must_use]
pub fn prune_empty_series(mut dataset: Dataset, policy: EmptyValuePolicy) -> Dataset {
    let mut filled: IndexMap<&str, bool> = IndexMap::new();
    for (_, values) in dataset.iter() {
        for (name, value) in values {
            let flag = filled.entry(name.as_str()).or_insert(false);
            *flag = *flag || !policy.is_empty(*value);
        }
    }

    let empty: Vec<String> = filled
        .into_iter()
        .filter(|(_, has_value)| !has_value)
        .map(|(name, _)| name.to_owned())
        .collect();
    if empty.is_empty() {
        return dataset;
    }

    debug!(removed = ?empty, ?policy, "pruning empty series");
    for (_, values) in dataset.iter_mut() {
        for name in &empty {
            values.shift_remove(name);
        }
    }
    dataset
}

/// Flattens rows into x-axis categories and name-indexed series columns.
pub fn flatten(dataset: &Dataset, alignment: AlignmentMode) -> ChartResult<SeriesLayout> {
    if alignment == AlignmentMode::Strict {
        check_alignment(dataset)?;
    }

    let categories: Vec<String> = dataset.categories().map(str::to_owned).collect();
    let series: Vec<SeriesColumn> = dataset
        .series_names()
        .into_iter()
        .map(|name| {
            let values = dataset
                .iter()
                .map(|(_, row)| row.get(&name).copied().flatten())
                .collect();
            SeriesColumn { name, values }
        })
        .collect();

    let present_cells: usize = dataset.iter().map(|(_, row)| row.len()).sum();
    let sparse_cells = (categories.len() * series.len()).saturating_sub(present_cells);
    debug!(
        categories = categories.len(),
        series = series.len(),
        sparse_cells,
        "flattened dataset"
    );

    Ok(SeriesLayout { categories, series })
}

fn check_alignment(dataset: &Dataset) -> ChartResult<()> {
    let mut rows = dataset.iter();
    let Some((_, first)) = rows.next() else {
        return Ok(());
    };

    for (category, row) in rows {
        if !row.keys().eq(first.keys()) {
            return Err(ChartError::DatasetAlignment {
                category: category.to_owned(),
                expected: join_names(first.keys()),
                found: join_names(row.keys()),
            });
        }
    }
    Ok(())
}

fn join_names<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names.map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl SeriesLayout {
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Merges the layout into `options`.
    ///
    /// Categories are appended to `xAxis[0].categories`. Series `i` gets its
    /// own y-axis at `yAxis[i]` and its values appended to `series[i].data`.
    /// Existing entries at those indices are merged into, not replaced.
    #[must_use]
    pub fn apply_to(&self, mut options: OptionMap) -> OptionMap {
        if !self.categories.is_empty() {
            update_indexed_entry(&mut options, "xAxis", 0, |axis| {
                append_to_sequence(
                    axis,
                    "categories",
                    self.categories.iter().map(|c| OptionValue::from(c.as_str())),
                );
            });
        }

        for (index, column) in self.series.iter().enumerate() {
            update_indexed_entry(&mut options, "yAxis", index, |axis| {
                set_path(axis, &["title", "text"], column.name.as_str());
                set_path(
                    axis,
                    &["labels", "style", "color"],
                    palette_color_expression(index),
                );
                set_path(axis, &["labels", "style", "font-weight"], "bold");
                set_path(axis, &["opposite"], true);
                set_path(axis, &["floor"], 0);
            });
            update_indexed_entry(&mut options, "series", index, |series| {
                set_path(series, &["yAxis"], index);
                set_path(series, &["name"], column.name.as_str());
                append_to_sequence(
                    series,
                    "data",
                    column.values.iter().map(|v| OptionValue::from(*v)),
                );
            });
        }
        options
    }
}

fn update_indexed_entry(
    options: &mut OptionMap,
    key: &str,
    index: usize,
    update: impl FnOnce(&mut OptionMap),
) {
    let slot = options.entry(key.to_owned()).or_default();
    let mut items = match std::mem::take(slot) {
        OptionValue::Seq(items) => items,
        OptionValue::Null => Vec::new(),
        // Single-axis object form.
        OptionValue::Map(single) => vec![OptionValue::Map(single)],
        other => {
            warn!(key, replaced = other.kind(), "replacing non-sequence option");
            Vec::new()
        }
    };
    if items.len() <= index {
        items.resize(index + 1, OptionValue::Map(OptionMap::new()));
    }

    let mut entry = match std::mem::take(&mut items[index]) {
        OptionValue::Map(entry) => entry,
        OptionValue::Null => OptionMap::new(),
        other => {
            warn!(key, index, replaced = other.kind(), "replacing non-mapping entry");
            OptionMap::new()
        }
    };
    update(&mut entry);
    items[index] = OptionValue::Map(entry);
    *slot = OptionValue::Seq(items);
}

fn append_to_sequence(
    map: &mut OptionMap,
    key: &str,
    values: impl Iterator<Item = OptionValue>,
) {
    let slot = map.entry(key.to_owned()).or_default();
    let mut items = match std::mem::take(slot) {
        OptionValue::Seq(items) => items,
        OptionValue::Null => Vec::new(),
        other => {
            warn!(key, replaced = other.kind(), "replacing non-sequence option");
            Vec::new()
        }
    };
    items.extend(values);
    *slot = OptionValue::Seq(items);
}

#[cfg(test)]
mod tests {
    use super::{SeriesColumn, SeriesLayout, update_indexed_entry};
    use crate::core::{OptionMap, OptionValue, lookup_path, set_path};

    #[test]
    fn indexed_entry_pads_missing_positions_with_mappings() {
        let mut options = OptionMap::new();
        update_indexed_entry(&mut options, "yAxis", 2, |axis| set_path(axis, &["floor"], 0));

        let axes = lookup_path(&options, "yAxis")
            .and_then(OptionValue::as_seq)
            .expect("sequence");
        assert_eq!(axes.len(), 3);
        assert!(axes[0].as_map().is_some_and(OptionMap::is_empty));
        assert_eq!(
            lookup_path(&options, "yAxis.2.floor").and_then(OptionValue::as_i64),
            Some(0)
        );
    }

    #[test]
    fn single_axis_object_is_wrapped_into_sequence() {
        let mut options = OptionMap::new();
        set_path(&mut options, &["xAxis", "crosshair"], true);
        let layout = SeriesLayout {
            categories: vec!["2020-01-01".to_owned()],
            series: vec![SeriesColumn {
                name: "A".to_owned(),
                values: vec![Some(1.0)],
            }],
        };

        let options = layout.apply_to(options);
        assert_eq!(
            lookup_path(&options, "xAxis.0.crosshair").and_then(OptionValue::as_bool),
            Some(true)
        );
        assert_eq!(
            lookup_path(&options, "xAxis.0.categories.0").and_then(OptionValue::as_str),
            Some("2020-01-01")
        );
    }
}
