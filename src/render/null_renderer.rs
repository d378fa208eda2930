use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the frame and records what it was given, then returns
/// the bare options JSON.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_series_count: usize,
    pub last_category_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;
        self.render_count += 1;
        self.last_series_count = frame.series_count;
        self.last_category_count = frame.category_count;
        Ok(frame.options_json.clone())
    }
}
