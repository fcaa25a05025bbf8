//! Rendering of composed reports

mod chart;
pub mod display;
pub mod image;

pub use display::DisplayRenderer;
pub use image::ImageRenderer;

use crate::panel::RenderedReport;
use anyhow::Result;

/// Hands a composed report to an output surface
///
/// `render` returns once the surface is done with the report: a window
/// renderer when the window is closed, a file renderer when the file is
/// written.
pub trait Renderer {
    /// Render one report
    fn render(&mut self, report: &RenderedReport) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, report: &RenderedReport) -> Result<()> {
        (**self).render(report)
    }
}

/// Records reports instead of drawing them
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    reports: Vec<RenderedReport>,
}

impl CaptureRenderer {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured reports, oldest first
    pub fn reports(&self) -> &[RenderedReport] {
        &self.reports
    }

    /// The most recent report
    pub fn last(&self) -> Option<&RenderedReport> {
        self.reports.last()
    }
}

impl Renderer for CaptureRenderer {
    fn render(&mut self, report: &RenderedReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Panel, TextPanel};

    fn report(title: &str) -> RenderedReport {
        RenderedReport {
            title: title.to_string(),
            rows: 1,
            cols: 1,
            panels: vec![Panel::Text(TextPanel {
                text: "hello".to_string(),
                monospace: true,
            })],
            title_band: 0.05,
        }
    }

    #[test]
    fn test_capture_records_in_order() {
        let mut capture = CaptureRenderer::new();
        assert!(capture.last().is_none());

        capture.render(&report("first")).unwrap();
        capture.render(&report("second")).unwrap();

        assert_eq!(capture.reports().len(), 2);
        assert_eq!(capture.reports()[0].title, "first");
        assert_eq!(capture.last().unwrap().title, "second");
    }

    #[test]
    fn test_render_through_mut_ref() {
        fn render_twice<R: Renderer>(mut renderer: R) {
            renderer.render(&report("a")).unwrap();
            renderer.render(&report("b")).unwrap();
        }

        let mut capture = CaptureRenderer::new();
        render_twice(&mut capture);
        assert_eq!(capture.reports().len(), 2);
    }
}
