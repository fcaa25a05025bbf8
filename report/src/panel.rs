//! Backend-agnostic panel descriptions
//!
//! A [`RenderedReport`] says what each panel shows; a
//! [`Renderer`](crate::render::Renderer) decides how it is drawn.

use crate::format::ValueFormat;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#4e79a7`
    pub const BLUE: Rgb = Rgb(0x4e, 0x79, 0xa7);
    /// `#f28e2b`
    pub const ORANGE: Rgb = Rgb(0xf2, 0x8e, 0x2b);
    /// `#59a14f`
    pub const GREEN: Rgb = Rgb(0x59, 0xa1, 0x4f);
    /// `#e15759`
    pub const RED: Rgb = Rgb(0xe1, 0x57, 0x59);
    /// `#b07aa1`
    pub const PURPLE: Rgb = Rgb(0xb0, 0x7a, 0xa1);
    /// `#edc948`
    pub const YELLOW: Rgb = Rgb(0xed, 0xc9, 0x48);
}

/// Direction bars grow in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Categories on x, values on y
    #[default]
    Vertical,
    /// Categories on y, values on x
    Horizontal,
}

/// One series of bars, one bar per category
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend name
    pub name: String,
    /// One value per category, in category order
    pub values: Vec<f64>,
    /// Bar fill
    pub color: Rgb,
    /// Shift of each bar from its category center, in category units
    pub offset: f64,
}

/// A bar chart over one or more series
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    /// Panel title
    pub title: String,
    /// Value-axis label
    pub axis_label: String,
    /// Category labels in dataset order
    pub labels: Vec<String>,
    /// Series drawn side by side
    pub series: Vec<BarSeries>,
    /// Width of each bar, in category units
    pub bar_width: f64,
    /// Bar direction
    pub orientation: Orientation,
    /// Per-bar value annotation; `None` draws no annotations
    pub value_format: Option<ValueFormat>,
    /// Whether a legend naming the series is drawn
    pub legend: bool,
}

impl BarPanel {
    /// Single-series panel with per-bar value annotations
    pub fn single(
        labels: Vec<String>,
        values: Vec<f64>,
        title: impl Into<String>,
        axis_label: impl Into<String>,
        color: Rgb,
        value_format: ValueFormat,
    ) -> Self {
        let title = title.into();
        Self {
            series: vec![BarSeries {
                name: title.clone(),
                values,
                color,
                offset: 0.0,
            }],
            title,
            axis_label: axis_label.into(),
            labels,
            bar_width: 0.8,
            orientation: Orientation::Vertical,
            value_format: Some(value_format),
            legend: false,
        }
    }

    /// Lay the bars out horizontally
    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    /// Annotation text for every bar, per series
    pub fn annotations(&self) -> Vec<Vec<String>> {
        match self.value_format {
            Some(format) => self
                .series
                .iter()
                .map(|s| s.values.iter().map(|&v| format.format(v)).collect())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Smallest and largest value over all series
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Free text drawn without axes, anchored top-left
#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    /// Text, drawn line by line
    pub text: String,
    /// Fixed-width font
    pub monospace: bool,
}

/// A single cell of the report grid
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Bar chart
    Bar(BarPanel),
    /// Text block
    Text(TextPanel),
}

impl Panel {
    /// Bar panel, if this is one
    pub fn as_bar(&self) -> Option<&BarPanel> {
        match self {
            Panel::Bar(bar) => Some(bar),
            Panel::Text(_) => None,
        }
    }

    /// Text panel, if this is one
    pub fn as_text(&self) -> Option<&TextPanel> {
        match self {
            Panel::Text(text) => Some(text),
            Panel::Bar(_) => None,
        }
    }
}

/// A composed figure: a grid of panels under one title
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    /// Figure-level title
    pub title: String,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Panels in row-major order
    pub panels: Vec<Panel>,
    /// Fraction of the figure height reserved above the grid for the title
    pub title_band: f64,
}

impl RenderedReport {
    /// Panel at a grid position
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.panels.get(row * self.cols + col)
    }

    /// Text of the first text panel
    pub fn summary_text(&self) -> Option<&str> {
        self.panels
            .iter()
            .find_map(Panel::as_text)
            .map(|text| text.text.as_str())
    }
}
