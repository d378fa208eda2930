use serde::{Deserialize, Serialize};

use crate::core::EmptyValuePolicy;
use crate::error::{ChartError, ChartResult};

use super::{AlignmentMode, Preset};

pub const DEFAULT_CDN_BASE: &str = "//code.highcharts.com";
pub const DEFAULT_LIBRARY_VERSION: &str = "4.1.6";

/// Where the emitted HTML loads the charting library from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
    #[serde(default = "default_library_version")]
    pub version: String,
    /// Local copy loaded when the CDN script did not register the plugin.
    #[serde(default)]
    pub local_fallback_path: Option<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            cdn_base: default_cdn_base(),
            version: default_library_version(),
            local_fallback_path: None,
        }
    }
}

impl LibraryConfig {
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_cdn_base(mut self, cdn_base: impl Into<String>) -> Self {
        self.cdn_base = cdn_base.into();
        self
    }

    #[must_use]
    pub fn with_local_fallback(mut self, path: impl Into<String>) -> Self {
        self.local_fallback_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn script_url(&self) -> String {
        format!(
            "{}/{}/highcharts.js",
            self.cdn_base.trim_end_matches('/'),
            self.version
        )
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub empty_value_policy: EmptyValuePolicy,
    #[serde(default)]
    pub alignment: AlignmentMode,
    #[serde(default)]
    pub library: LibraryConfig,
}

impl ChartConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            preset: Preset::default(),
            empty_value_policy: EmptyValuePolicy::default(),
            alignment: AlignmentMode::default(),
            library: LibraryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    #[must_use]
    pub fn with_empty_value_policy(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_value_policy = policy;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: AlignmentMode) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_library(mut self, library: LibraryConfig) -> Self {
        self.library = library;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_cdn_base() -> String {
    DEFAULT_CDN_BASE.to_owned()
}

fn default_library_version() -> String {
    DEFAULT_LIBRARY_VERSION.to_owned()
}
