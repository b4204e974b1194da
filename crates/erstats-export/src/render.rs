use std::collections::HashMap;

use erstats_core::widget::Dashboard;
use serde_json::{Value, json};
use tera::{Context, Tera};
use tracing::debug;

use crate::error::ExportError;
use crate::plotly::{self, PLOTLY_CDN};

const HTML_PAGE: &str = include_str!("../templates/dashboard.html");
const HTML_WIDGETS: &str = include_str!("../templates/widgets.html");
const MARKDOWN_PAGE: &str = include_str!("../templates/dashboard.md");
const MARKDOWN_WIDGETS: &str = include_str!("../templates/widgets.md");

/// Templates whose names end in `.html` are autoescaped by Tera, so every
/// dataset string reaches the page as text, never as markup.
fn engine() -> Result<Tera, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("widgets.html", HTML_WIDGETS),
        ("dashboard.html", HTML_PAGE),
        ("widgets.md", MARKDOWN_WIDGETS),
        ("dashboard.md", MARKDOWN_PAGE),
    ])
    .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

/// The dashboard as template context, with a Plotly figure attached to
/// every chart widget.
fn context(dashboard: &Dashboard) -> Result<Context, ExportError> {
    let figures: HashMap<&str, Value> = dashboard
        .charts()
        .into_iter()
        .map(|chart| (chart.id.as_str(), plotly::figure(chart)))
        .collect();

    let mut value = serde_json::to_value(dashboard)?;
    attach_figures(&mut value, &figures);
    debug!(charts = figures.len(), "attached chart figures");

    Context::from_value(json!({
        "dashboard": value,
        "plotly_cdn": PLOTLY_CDN,
    }))
    .map_err(|e| ExportError::TemplateRender(e.to_string()))
}

fn attach_figures(value: &mut Value, figures: &HashMap<&str, Value>) {
    match value {
        Value::Object(map) => {
            let is_chart = map.get("widget").and_then(Value::as_str) == Some("chart");
            if is_chart {
                let figure = map
                    .get("id")
                    .and_then(Value::as_str)
                    .and_then(|id| figures.get(id))
                    .cloned();
                if let Some(figure) = figure {
                    map.insert("figure".into(), figure);
                }
            }
            for child in map.values_mut() {
                attach_figures(child, figures);
            }
        }
        Value::Array(items) => {
            for item in items {
                attach_figures(item, figures);
            }
        }
        _ => {}
    }
}

/// Render a self-contained HTML page. Tabs switch without script; charts are
/// drawn by Plotly loaded from its CDN.
pub fn render_html(dashboard: &Dashboard) -> Result<String, ExportError> {
    let tera = engine()?;
    let rendered = tera.render("dashboard.html", &context(dashboard)?)?;
    Ok(rendered)
}

/// Render the Markdown-ish text the DOCX generator reads. Every tab is
/// written out in order, charts as their underlying series.
pub fn render_markdown(dashboard: &Dashboard) -> Result<String, ExportError> {
    let tera = engine()?;
    let rendered = tera.render("dashboard.md", &context(dashboard)?)?;
    Ok(rendered)
}

/// The widget tree as pretty-printed JSON, without figures.
pub fn render_json(dashboard: &Dashboard) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(dashboard)?)
}
