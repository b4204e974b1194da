//! Chart descriptions.
//!
//! A chart is a plain description of which columns go on which axis and how
//! points are sized or colored. Turning it into something drawable is the
//! export layer's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::table::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChartKind {
    Bar,
    Scatter,
    Line,
    /// Horizontal intervals from `x` to `x_end`, one bar per category.
    Timeline,
    /// Several line panels laid out on a grid, see [`Grid`].
    Grid,
}

/// Continuous color scales, named after their Plotly counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ColorScale {
    Greens,
    Reds,
    Blues,
}

/// Per-point color driven by a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorEncoding {
    pub title: String,
    pub values: Vec<f64>,
    pub scale: Option<ColorScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Series {
    pub name: String,
    pub x: Vec<Cell>,
    pub y: Vec<Cell>,
    /// Interval ends for timeline charts.
    pub x_end: Option<Vec<Cell>>,
    /// Hover names, one per point.
    pub labels: Option<Vec<String>>,
    /// Text drawn next to each point.
    pub text: Option<Vec<String>>,
    pub size: Option<Vec<f64>>,
    pub color: Option<ColorEncoding>,
    pub line_color: Option<String>,
    /// Zero-based grid cell, row-major. Only meaningful for grid charts.
    pub panel: Option<usize>,
    pub secondary_y: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<Cell>, y: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            x_end: None,
            labels: None,
            text: None,
            size: None,
            color: None,
            line_color: None,
            panel: None,
            secondary_y: false,
        }
    }

    pub fn x_end(mut self, x_end: Vec<Cell>) -> Self {
        self.x_end = Some(x_end);
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self
    }

    pub fn size(mut self, size: Vec<f64>) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(
        mut self,
        title: impl Into<String>,
        values: Vec<f64>,
        scale: Option<ColorScale>,
    ) -> Self {
        self.color = Some(ColorEncoding {
            title: title.into(),
            values,
            scale,
        });
        self
    }

    pub fn line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn panel(mut self, panel: usize) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn secondary_y(mut self) -> Self {
        self.secondary_y = true;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Subplot layout for [`ChartKind::Grid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    /// Panel titles in row-major order.
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Chart {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub series: Vec<Series>,
    pub tick_angle: Option<i32>,
    pub height: Option<u32>,
    pub grid: Option<Grid>,
}

impl Chart {
    pub fn new(id: impl Into<String>, kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            x_title: None,
            y_title: None,
            series: Vec::new(),
            tick_angle: None,
            height: None,
            grid: None,
        }
    }

    pub fn axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self.y_title = Some(y_title.into());
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn tick_angle(mut self, degrees: i32) -> Self {
        self.tick_angle = Some(degrees);
        self
    }

    pub fn height(mut self, px: u32) -> Self {
        self.height = Some(px);
        self
    }

    pub fn grid(mut self, rows: usize, cols: usize, titles: &[&str]) -> Self {
        self.grid = Some(Grid {
            rows,
            cols,
            titles: titles.iter().map(|t| t.to_string()).collect(),
        });
        self
    }
}
