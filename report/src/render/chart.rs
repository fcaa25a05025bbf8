//! Plotters drawing shared by the renderers

use crate::panel::{BarPanel, Orientation, Panel, RenderedReport, Rgb, TextPanel};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const TITLE_FONT_SIZE: u32 = 26;
const CAPTION_FONT_SIZE: u32 = 18;
const TICK_LABEL_FONT_SIZE: u32 = 13;
const DATA_LABEL_FONT_SIZE: u32 = 13;
const SUMMARY_FONT_SIZE: u32 = 15;
const SUMMARY_LINE_HEIGHT: i32 = 22;

/// Value-axis gridlines
pub(crate) const GRID_COLOR: RGBColor = RGBColor(0xDD, 0xDD, 0xDD);

/// Headroom above the tallest bar, for its annotation
const VALUE_HEADROOM: f64 = 0.15;

/// Draw a whole report onto `root`
pub(crate) fn draw_report<DB>(root: DrawingArea<DB, Shift>, report: &RenderedReport) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (_, height) = root.dim_in_pixel();
    let band = (height as f64 * report.title_band).round() as u32;
    let (title_area, grid) = root.split_vertically(band);

    let (title_w, title_h) = title_area.dim_in_pixel();
    let title_style = ("sans-serif", TITLE_FONT_SIZE)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    title_area.draw_text(
        &report.title,
        &title_style,
        ((title_w / 2) as i32, (title_h / 2) as i32),
    )?;

    let cells = grid.split_evenly((report.rows, report.cols));
    for (cell, panel) in cells.iter().zip(&report.panels) {
        match panel {
            Panel::Bar(bar) => draw_bar_panel(cell, bar)?,
            Panel::Text(text) => draw_text_panel(cell, text)?,
        }
    }

    root.present()?;
    Ok(())
}

fn draw_bar_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &BarPanel) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let horizontal = panel.orientation == Orientation::Horizontal;
    let num_categories = panel.labels.len();
    let categories = -0.5..(num_categories as f64 - 0.5);
    let values = value_range(panel);

    // Maps (category position, value) onto chart coordinates
    let point = |category: f64, value: f64| {
        if horizontal {
            (value, category)
        } else {
            (category, value)
        }
    };

    let (x_range, y_range) = if horizontal {
        (values, categories)
    } else {
        (categories, values)
    };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title.as_str(), ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(if horizontal { 120 } else { 70 })
        .build_cartesian_2d(x_range, y_range)?;

    let label_formatter = |v: &f64| category_label(&panel.labels, *v);
    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(WHITE.mix(0.0))
        .bold_line_style(GRID_COLOR)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE));
    if horizontal {
        mesh.disable_y_mesh()
            .y_labels(num_categories)
            .y_label_formatter(&label_formatter)
            .x_desc(panel.axis_label.as_str());
    } else {
        mesh.disable_x_mesh()
            .x_labels(num_categories)
            .x_label_formatter(&label_formatter)
            .y_desc(panel.axis_label.as_str());
    }
    mesh.draw()?;

    let half_width = panel.bar_width / 2.0;
    for series in &panel.series {
        let color = rgb(series.color);

        let bars = series.values.iter().enumerate().map(|(idx, &value)| {
            let center = idx as f64 + series.offset;
            Rectangle::new(
                [point(center - half_width, 0.0), point(center + half_width, value)],
                color.mix(0.9).filled(),
            )
        });
        let anno = chart.draw_series(bars)?;
        if panel.legend {
            anno.label(series.name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
        }

        if let Some(format) = panel.value_format {
            let pos = if horizontal {
                Pos::new(HPos::Left, VPos::Center)
            } else {
                Pos::new(HPos::Center, VPos::Bottom)
            };
            let labels = series.values.iter().enumerate().map(|(idx, &value)| {
                let center = idx as f64 + series.offset;
                let text = if horizontal {
                    format!(" {}", format.format(value))
                } else {
                    format.format(value)
                };
                Text::new(
                    text,
                    point(center, value),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(pos),
                )
            });
            chart.draw_series(labels)?;
        }
    }

    if panel.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", TICK_LABEL_FONT_SIZE))
            .draw()?;
    }

    Ok(())
}

fn draw_text_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &TextPanel) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let family = if panel.monospace {
        "monospace"
    } else {
        "sans-serif"
    };
    let style = (family, SUMMARY_FONT_SIZE).into_font().color(&BLACK);

    for (idx, line) in panel.text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        area.draw_text(line, &style, (10, 10 + idx as i32 * SUMMARY_LINE_HEIGHT))?;
    }

    Ok(())
}

/// Value axis range: always includes zero, padded for annotations
fn value_range(panel: &BarPanel) -> std::ops::Range<f64> {
    let (lo, hi) = panel.value_bounds().unwrap_or((0.0, 0.0));
    let (lo, hi) = (lo.min(0.0), hi.max(0.0));
    let span = hi - lo;
    if span <= 0.0 {
        return 0.0..1.0;
    }

    let lo = if lo < 0.0 { lo - span * VALUE_HEADROOM } else { lo };
    lo..(hi + span * VALUE_HEADROOM)
}

/// Label for a tick at `position`; blank between categories
fn category_label(labels: &[String], position: f64) -> String {
    let idx = position.round();
    if idx < 0.0 || (position - idx).abs() > 0.3 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}
