use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::core::{OptionMap, OptionValue};

/// Named bundle of chart-type defaults applied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Preset {
    #[default]
    Default,
    Spline,
    /// Line chart tuned for large, high-frequency datasets.
    FastLine,
}

impl Preset {
    /// Unrecognized names fall back to `Default`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "fastline" => Self::FastLine,
            "spline" => Self::Spline,
            "default" => Self::Default,
            _ => {
                debug!(preset = name, "unknown preset, using default");
                Self::Default
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Spline => "spline",
            Self::FastLine => "fastline",
        }
    }

    #[must_use]
    pub fn base_options(self) -> OptionMap {
        let block = match self {
            Self::FastLine => json!({
                "chart": {
                    "type": "line",
                    "zoomType": "xy"
                },
                "plotOptions": {
                    "series": {
                        "animation": false,
                        "enableMouseTracking": false,
                        "marker": { "enabled": false },
                        "dataGrouping": { "enabled": false }
                    }
                }
            }),
            Self::Default | Self::Spline => json!({
                "chart": {
                    "type": "spline",
                    "zoomType": "xy"
                },
                "plotOptions": {
                    "series": {
                        "states": {
                            "hover": { "lineWidthPlus": 3 }
                        },
                        "marker": { "enabled": false }
                    }
                },
                "tooltip": { "shared": true },
                "xAxis": [{ "crosshair": true }]
            }),
        };
        OptionValue::from(block).into_map().unwrap_or_default()
    }
}

impl From<String> for Preset {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Preset> for &'static str {
    fn from(preset: Preset) -> Self {
        preset.name()
    }
}

/// Options every chart starts with, before the preset block.
pub(super) fn branding_options() -> OptionMap {
    OptionValue::from(json!({ "credits": { "enabled": false } }))
        .into_map()
        .unwrap_or_default()
}
