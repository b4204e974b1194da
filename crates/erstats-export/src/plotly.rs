//! Chart descriptions to Plotly figure JSON.
//!
//! The output is the `{ data, layout }` object that `Plotly.newPlot` takes,
//! so the HTML page only has to hand it over.

use erstats_core::chart::{Chart, ChartKind, ColorScale, Series};
use erstats_core::table::Cell;
use serde_json::{Map, Value, json};

/// Largest bubble diameter in pixels for size-encoded scatter charts.
const MAX_MARKER_SIZE: f64 = 40.0;

/// Gap between grid panels, as a fraction of the plotting area.
const PANEL_GAP: f64 = 0.08;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn figure(chart: &Chart) -> Value {
    let data: Vec<Value> = chart.series.iter().map(|s| trace(chart, s)).collect();
    json!({ "data": data, "layout": layout(chart) })
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Number(n) => json!(n),
        Cell::Decimal(d) => json!(d),
        Cell::Text(s) => json!(s),
    }
}

fn cells(values: &[Cell]) -> Value {
    Value::Array(values.iter().map(cell_value).collect())
}

fn axis_suffix(n: usize) -> String {
    if n <= 1 { String::new() } else { n.to_string() }
}

fn trace(chart: &Chart, series: &Series) -> Value {
    let mut t = Map::new();
    t.insert("name".into(), json!(series.name));

    match chart.kind {
        ChartKind::Bar => {
            t.insert("type".into(), json!("bar"));
            t.insert("x".into(), cells(&series.x));
            t.insert("y".into(), cells(&series.y));
        }
        ChartKind::Scatter => {
            t.insert("type".into(), json!("scatter"));
            t.insert("mode".into(), json!("markers"));
            t.insert("x".into(), cells(&series.x));
            t.insert("y".into(), cells(&series.y));
        }
        ChartKind::Line | ChartKind::Grid => {
            let mode = if series.text.is_some() {
                "lines+markers+text"
            } else {
                "lines+markers"
            };
            t.insert("type".into(), json!("scatter"));
            t.insert("mode".into(), json!(mode));
            t.insert("x".into(), cells(&series.x));
            t.insert("y".into(), cells(&series.y));
        }
        ChartKind::Timeline => {
            let ends = series.x_end.as_deref().unwrap_or(&series.x);
            let widths: Vec<f64> = series
                .x
                .iter()
                .zip(ends)
                .map(|(start, end)| match (start.as_f64(), end.as_f64()) {
                    (Some(s), Some(e)) => e - s,
                    _ => 0.0,
                })
                .collect();
            t.insert("type".into(), json!("bar"));
            t.insert("orientation".into(), json!("h"));
            t.insert("base".into(), cells(&series.x));
            t.insert("x".into(), json!(widths));
            t.insert("y".into(), cells(&series.y));
        }
    }

    if let Some(labels) = &series.labels {
        t.insert("hovertext".into(), json!(labels));
    }
    if let Some(text) = &series.text {
        t.insert("text".into(), json!(text));
        t.insert("textposition".into(), json!("top center"));
    }

    let marker = marker(series);
    if !marker.is_empty() {
        t.insert("marker".into(), Value::Object(marker));
    }
    if let Some(color) = &series.line_color {
        t.insert("line".into(), json!({ "color": color }));
    }

    if let (ChartKind::Grid, Some(grid)) = (chart.kind, &chart.grid) {
        let panel = series.panel.unwrap_or(0);
        t.insert("xaxis".into(), json!(format!("x{}", axis_suffix(panel + 1))));
        let y = if series.secondary_y {
            secondary_axis(grid.rows * grid.cols, panel)
        } else {
            panel + 1
        };
        t.insert("yaxis".into(), json!(format!("y{}", axis_suffix(y))));
    }

    Value::Object(t)
}

fn marker(series: &Series) -> Map<String, Value> {
    let mut m = Map::new();
    if let Some(size) = &series.size {
        let max = size.iter().copied().fold(0.0_f64, f64::max);
        m.insert("size".into(), json!(size));
        m.insert("sizemode".into(), json!("area"));
        if max > 0.0 {
            m.insert(
                "sizeref".into(),
                json!(2.0 * max / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)),
            );
        }
    }
    if let Some(color) = &series.color {
        m.insert("color".into(), json!(color.values));
        m.insert("colorscale".into(), json!(scale_name(color.scale)));
        m.insert("showscale".into(), json!(true));
        m.insert("colorbar".into(), json!({ "title": { "text": color.title } }));
    }
    m
}

fn scale_name(scale: Option<ColorScale>) -> &'static str {
    match scale {
        Some(ColorScale::Greens) => "Greens",
        Some(ColorScale::Reds) => "Reds",
        Some(ColorScale::Blues) => "Blues",
        None => "Viridis",
    }
}

/// Overlay axes are numbered after the regular panel axes.
fn secondary_axis(panels: usize, panel: usize) -> usize {
    panels + panel + 1
}

fn layout(chart: &Chart) -> Value {
    let mut l = Map::new();
    l.insert("title".into(), json!({ "text": chart.title }));
    if let Some(height) = chart.height {
        l.insert("height".into(), json!(height));
    }

    match (chart.kind, &chart.grid) {
        (ChartKind::Grid, Some(grid)) => {
            let panels = grid.rows * grid.cols;
            let mut annotations = Vec::new();
            for panel in 0..panels {
                let (row, col) = (panel / grid.cols, panel % grid.cols);
                let x = domain(col, grid.cols);
                // Row 0 is the top row; Plotly's y domain grows upward.
                let y = domain(grid.rows - 1 - row, grid.rows);
                let n = panel + 1;

                l.insert(
                    format!("xaxis{}", axis_suffix(n)),
                    json!({ "domain": x, "anchor": format!("y{}", axis_suffix(n)) }),
                );
                l.insert(
                    format!("yaxis{}", axis_suffix(n)),
                    json!({ "domain": y, "anchor": format!("x{}", axis_suffix(n)) }),
                );

                if let Some(title) = grid.titles.get(panel) {
                    annotations.push(json!({
                        "text": title,
                        "x": (x[0] + x[1]) / 2.0,
                        "y": y[1],
                        "xref": "paper",
                        "yref": "paper",
                        "xanchor": "center",
                        "yanchor": "bottom",
                        "showarrow": false,
                    }));
                }
            }

            for series in chart.series.iter().filter(|s| s.secondary_y) {
                let panel = series.panel.unwrap_or(0);
                let n = panel + 1;
                l.insert(
                    format!("yaxis{}", axis_suffix(secondary_axis(panels, panel))),
                    json!({
                        "overlaying": format!("y{}", axis_suffix(n)),
                        "anchor": format!("x{}", axis_suffix(n)),
                        "side": "right",
                    }),
                );
            }
            l.insert("annotations".into(), Value::Array(annotations));
        }
        _ => {
            let mut xaxis = Map::new();
            if let Some(title) = &chart.x_title {
                xaxis.insert("title".into(), json!({ "text": title }));
            }
            if let Some(angle) = chart.tick_angle {
                xaxis.insert("tickangle".into(), json!(angle));
            }
            l.insert("xaxis".into(), Value::Object(xaxis));

            let mut yaxis = Map::new();
            if let Some(title) = &chart.y_title {
                yaxis.insert("title".into(), json!({ "text": title }));
            }
            if chart.kind == ChartKind::Timeline {
                yaxis.insert("autorange".into(), json!("reversed"));
            }
            l.insert("yaxis".into(), Value::Object(yaxis));
        }
    }

    if chart.kind == ChartKind::Timeline {
        l.insert("barmode".into(), json!("overlay"));
    }

    Value::Object(l)
}

fn domain(index: usize, count: usize) -> [f64; 2] {
    let width = 1.0 / count as f64;
    let start = index as f64 * width;
    let end = start + width;
    let pad = if count > 1 { PANEL_GAP / 2.0 } else { 0.0 };
    [
        if index == 0 { start } else { start + pad },
        if index + 1 == count { end } else { end - pad },
    ]
}
