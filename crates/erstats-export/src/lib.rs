//! erstats-export
//!
//! Turns a rendered dashboard into something a host can show: a
//! self-contained HTML page, the raw widget JSON, Markdown-ish text, or DOCX.

pub mod docx;
pub mod error;
pub mod plotly;
pub mod render;
pub mod styles;

use std::fmt;
use std::str::FromStr;

use erstats_core::widget::Dashboard;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Html,
    Json,
    Markdown,
    Docx,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Html, Format::Json, Format::Markdown, Format::Docx];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Json => "json",
            Format::Markdown => "md",
            Format::Docx => "docx",
        }
    }

    /// Binary formats cannot go to a terminal.
    pub fn is_binary(self) -> bool {
        matches!(self, Format::Docx)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Html => "html",
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Docx => "docx",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            "markdown" | "md" => Ok(Format::Markdown),
            "docx" => Ok(Format::Docx),
            other => Err(format!(
                "unknown format '{other}' (expected html, json, markdown or docx)"
            )),
        }
    }
}

/// Render a dashboard in the requested format.
pub fn export(
    dashboard: &Dashboard,
    format: Format,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    match format {
        Format::Html => render::render_html(dashboard).map(String::into_bytes),
        Format::Json => render::render_json(dashboard).map(String::into_bytes),
        Format::Markdown => render::render_markdown(dashboard).map(String::into_bytes),
        Format::Docx => {
            let markdown = render::render_markdown(dashboard)?;
            docx::generate_docx(&markdown, styles)
        }
    }
}
