mod frame;
mod html_renderer;
mod null_renderer;

pub use frame::RenderFrame;
pub use html_renderer::HtmlRenderer;
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive a fully built `RenderFrame`, so output code stays
/// isolated from option merging and dataset shaping.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<String>;
}
