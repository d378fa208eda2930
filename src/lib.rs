//! highcharts-graph: Highcharts option trees from category-indexed data.
//!
//! The crate keeps a schema-less options tree and a sparse dataset per chart,
//! then runs a pure `sort -> prune -> flatten -> merge -> serialize` pipeline
//! to produce the JSON handed to the charting library or an HTML snippet
//! invoking it.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, Preset};
pub use core::{OptionMap, OptionValue, RawExpression};
pub use error::{ChartError, ChartResult};
