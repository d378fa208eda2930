use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::core::json_writer::map_to_json_string;
use crate::core::{
    Dataset, OptionMap, OptionValue, SortDirection, date_to_category, decimal_to_f64, lookup_path,
    merge, series_values, set_path, try_merge,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{HtmlRenderer, RenderFrame, Renderer};

use super::presets::branding_options;
use super::series_builder::{SeriesLayout, flatten, prune_empty_series};
use super::{ChartConfig, Preset};

/// One chart: an options tree plus the category-indexed dataset.
///
/// Mutation goes through `&mut self`; rendering borrows immutably and runs
/// the `sort -> prune -> flatten -> merge -> serialize` pipeline on copies, so
/// rendering twice yields the same output.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    options: OptionMap,
    data: Dataset,
}

impl Chart {
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: Option<&str>, preset: Preset) -> Self {
        let mut config = ChartConfig::new(title).with_preset(preset);
        config.subtitle = subtitle.map(str::to_owned);
        Self::from_config(config)
    }

    #[must_use]
    pub fn from_config(config: ChartConfig) -> Self {
        let mut options = OptionMap::new();
        set_path(&mut options, &["title", "text"], config.title.as_str());
        if let Some(subtitle) = config.subtitle.as_deref().filter(|s| !s.is_empty()) {
            set_path(&mut options, &["subtitle", "text"], subtitle);
        }
        merge(&mut options, branding_options());
        merge(&mut options, config.preset.base_options());
        debug!(preset = config.preset.name(), "chart created");

        Self {
            config,
            options,
            data: Dataset::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Reads a configured option by dotted path, e.g. `chart.type`.
    #[must_use]
    pub fn option(&self, path: &str) -> Option<&OptionValue> {
        lookup_path(&self.options, path)
    }

    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Deep-merges a fragment into the options, last writer wins.
    ///
    /// A fragment that is not a mapping is ignored.
    pub fn apply_options(&mut self, fragment: impl Into<OptionValue>) {
        match fragment.into() {
            OptionValue::Map(fragment) => merge(&mut self.options, fragment),
            other => warn!(kind = other.kind(), "ignoring non-mapping options fragment"),
        }
    }

    /// Strict form of [`Chart::apply_options`].
    ///
    /// Rejects fragments that would replace a mapping with a scalar or the
    /// reverse; options are left unchanged on error.
    pub fn try_apply_options(&mut self, fragment: impl Into<OptionValue>) -> ChartResult<()> {
        match fragment.into() {
            OptionValue::Map(fragment) => try_merge(&mut self.options, fragment),
            other => Err(ChartError::InvalidFragmentShape {
                path: String::new(),
                existing: "mapping",
                incoming: other.kind(),
            }),
        }
    }

    /// Inserts or overwrites the row for `category`.
    pub fn add_point<K, V>(
        &mut self,
        category: impl Into<String>,
        values: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<Option<f64>>,
    {
        let category = category.into();
        let values = series_values(values);
        trace!(category = %category, series = values.len(), "add point");
        if self.data.insert(category, values).is_some() {
            trace!("replaced existing category row");
        }
    }

    /// Adds a row keyed by an ISO `YYYY-MM-DD` date label.
    pub fn add_dated_point<K, V>(
        &mut self,
        date: NaiveDate,
        values: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<Option<f64>>,
    {
        self.add_point(date_to_category(date), values);
    }

    /// Adds a row of decimal values. Nothing is inserted if any value fails to convert.
    pub fn add_decimal_point<K>(
        &mut self,
        category: impl Into<String>,
        values: impl IntoIterator<Item = (K, Decimal)>,
    ) -> ChartResult<()>
    where
        K: Into<String>,
    {
        let converted = values
            .into_iter()
            .map(|(name, value)| -> ChartResult<(String, f64)> {
                let name = name.into();
                let value = decimal_to_f64(value, &name)?;
                Ok((name, value))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        self.add_point(category, converted);
        Ok(())
    }

    pub fn sort_data(&mut self, direction: SortDirection) {
        debug!(?direction, rows = self.data.len(), "sort data");
        self.data.sort(direction);
    }

    /// Runs sort (optional), prune and flatten on a copy of the dataset.
    pub fn series_layout(&self, sort: bool) -> ChartResult<SeriesLayout> {
        let dataset = if sort {
            self.data.clone().sorted(SortDirection::Asc)
        } else {
            self.data.clone()
        };
        let dataset = prune_empty_series(dataset, self.config.empty_value_policy);
        flatten(&dataset, self.config.alignment)
    }

    /// Options merged with the derived axes and series.
    pub fn build_options(&self, sort: bool) -> ChartResult<OptionMap> {
        let layout = self.series_layout(sort)?;
        Ok(layout.apply_to(self.options.clone()))
    }

    /// JSON handed to the charting library; raw expressions are unquoted.
    pub fn render_options(&self, sort: bool) -> ChartResult<String> {
        map_to_json_string(&self.build_options(sort)?)
    }

    /// Builds the frame a renderer consumes. Rows are always sorted ascending.
    pub fn render_frame(&self, target_id: &str) -> ChartResult<RenderFrame> {
        let layout = self.series_layout(true)?;
        let series_count = layout.series_count();
        let category_count = layout.category_count();
        let options = layout.apply_to(self.options.clone());

        Ok(RenderFrame {
            target_id: target_id.to_owned(),
            options_json: map_to_json_string(&options)?,
            series_count,
            category_count,
        })
    }

    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        target_id: &str,
    ) -> ChartResult<String> {
        let frame = self.render_frame(target_id)?;
        renderer.render(&frame)
    }

    /// HTML snippet loading the library and drawing into `#target_id`.
    pub fn render_html(&self, target_id: &str) -> ChartResult<String> {
        let mut renderer = HtmlRenderer::new(self.config.library.clone());
        self.render_with(&mut renderer, target_id)
    }
}
