mod chart;
mod chart_config;
mod presets;
mod series_builder;

pub use chart::Chart;
pub use chart_config::{ChartConfig, DEFAULT_CDN_BASE, DEFAULT_LIBRARY_VERSION, LibraryConfig};
pub use presets::Preset;
pub use series_builder::{
    AlignmentMode, SeriesColumn, SeriesLayout, flatten, palette_color_expression,
    prune_empty_series,
};
