use crate::error::{ChartError, ChartResult};

/// Backend-agnostic payload for one chart render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// DOM element id the chart is drawn into.
    pub target_id: String,
    /// Serialized options, raw expressions already unquoted.
    pub options_json: String,
    pub series_count: usize,
    pub category_count: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(target_id: impl Into<String>, options_json: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            options_json: options_json.into(),
            series_count: 0,
            category_count: 0,
        }
    }

    #[must_use]
    pub fn with_counts(mut self, series_count: usize, category_count: usize) -> Self {
        self.series_count = series_count;
        self.category_count = category_count;
        self
    }

    /// Rejects target ids that would need escaping inside `$("#...")`.
    pub fn validate(&self) -> ChartResult<()> {
        if self.target_id.is_empty() {
            return Err(ChartError::InvalidData(
                "render target id must not be empty".to_owned(),
            ));
        }
        if let Some(bad) = self
            .target_id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ChartError::InvalidData(format!(
                "render target id contains unsupported character {bad:?}"
            )));
        }
        if self.options_json.is_empty() {
            return Err(ChartError::InvalidData(
                "render options payload must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
