pub mod dataset;
pub mod json_writer;
pub mod merge;
pub mod option_value;
pub mod primitives;

pub use dataset::{Dataset, EmptyValuePolicy, SeriesValues, SortDirection, series_values};
pub use merge::{merge, set_path, try_merge};
pub use option_value::{OptionMap, OptionValue, RawExpression, lookup_path, map_from_json_str};
pub use primitives::{date_to_category, decimal_to_f64, parse_decimal_str};
