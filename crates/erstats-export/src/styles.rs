use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Arial").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Table cell font size in points.
    pub table_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Heading 2 font size in points.
    pub heading2_size: usize,

    /// Heading 3 font size in points.
    pub heading3_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            table_size: 9,
            heading1_size: 18,
            heading2_size: 15,
            heading3_size: 12,
        }
    }
}
