//! Interactive window output
//!
//! The figure is rasterized with plotters into an in-memory RGB buffer and
//! shown through minifb. Rendering returns once the window is closed.

use super::chart::draw_report;
use super::Renderer;
use crate::panel::RenderedReport;
use anyhow::{Context, Result};
use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;
use tracing::info;

const TARGET_FPS: usize = 30;

/// Shows reports in a window and waits for the user to close it
#[derive(Debug, Clone)]
pub struct DisplayRenderer {
    size: (u32, u32),
}

impl DisplayRenderer {
    /// Create a renderer with the given window size in pixels
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }

    /// Window size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl Renderer for DisplayRenderer {
    fn render(&mut self, report: &RenderedReport) -> Result<()> {
        let frame = rasterize(report, self.size)?;
        let (width, height) = (self.size.0 as usize, self.size.1 as usize);

        let mut window = Window::new(&report.title, width, height, WindowOptions::default())
            .context("Failed to open report window")?;
        window.set_target_fps(TARGET_FPS);

        info!("Showing benchmark comparison; close the window or press Esc to exit");
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&frame, width, height)
                .context("Failed to update report window")?;
        }

        Ok(())
    }
}

/// Draw a report into a row-major `0RGB` frame
fn rasterize(report: &RenderedReport, size: (u32, u32)) -> Result<Vec<u32>> {
    let mut rgb = vec![0u8; size.0 as usize * size.1 as usize * 3];
    draw_report(
        BitMapBackend::with_buffer(&mut rgb, size).into_drawing_area(),
        report,
    )
    .context("Failed to draw report")?;

    Ok(rgb
        .chunks_exact(3)
        .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::ChartComposer;
    use allocbench_core::SyntheticDatasetProvider;

    #[test]
    fn test_rasterize_fills_frame() {
        let report = ChartComposer::default().compose(&SyntheticDatasetProvider::new().provide());
        let frame = rasterize(&report, (700, 400)).unwrap();

        assert_eq!(frame.len(), 700 * 400);
        assert_eq!(frame[0], 0x00FF_FFFF);
        assert!(frame.iter().any(|&px| px != 0x00FF_FFFF));
    }

    #[test]
    fn test_display_size() {
        assert_eq!(DisplayRenderer::new((1400, 800)).size(), (1400, 800));
    }
}
