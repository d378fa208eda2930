use tracing::debug;

use crate::api::LibraryConfig;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Emits the `<script>` tags that load the library and draw the chart.
///
/// The output expects jQuery on the page, as the library's jQuery adapter
/// (`$("#id").highcharts(...)`) is used for the call.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    library: LibraryConfig,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(library: LibraryConfig) -> Self {
        Self { library }
    }

    #[must_use]
    pub fn library(&self) -> &LibraryConfig {
        &self.library
    }

    fn fallback_loader(&self) -> Option<String> {
        self.library.local_fallback_path.as_deref().map(|path| {
            // Written through a single-quoted JS string into an HTML attribute.
            let path = escape_single_quoted_js(&escape_attribute(path));
            format!(
                "<script>typeof $.fn.highcharts == 'function' || \
                 document.write('<script src=\"{path}\"><\\/script>')</script>"
            )
        })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;

        // `</` inside an inline script would close the tag early.
        let options = frame.options_json.replace("</", "<\\/");
        let mut html = format!(
            "<script src=\"{}\"></script>",
            escape_attribute(&self.library.script_url())
        );
        if let Some(loader) = self.fallback_loader() {
            html.push_str(&loader);
        }
        html.push_str(&format!(
            "<script>$(function () {{$(\"#{}\").highcharts({options});}});</script>",
            frame.target_id
        ));

        debug!(
            target_id = %frame.target_id,
            series = frame.series_count,
            categories = frame.category_count,
            bytes = html.len(),
            "rendered html snippet"
        );
        Ok(html)
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_single_quoted_js(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
