use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single table cell.
///
/// Counts and scores are whole numbers; anything that carries its own
/// formatting (percentages, ranges, currency) stays text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Cell {
    Number(u32),
    Decimal(f64),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Numeric view of the cell, used for chart axes and encodings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(f64::from(*n)),
            Cell::Decimal(d) => Some(*d),
            Cell::Text(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Decimal(d) => write!(f, "{d}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Number(n)
    }
}

impl From<f64> for Cell {
    fn from(d: f64) -> Self {
        Cell::Decimal(d)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// A row type with a fixed, named schema.
///
/// `cells` must yield one cell per entry of `COLUMNS`, in the same order.
pub trait Record {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

/// A rendered table: column headers plus rows of cells, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    pub id: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Project typed records into a table, keeping definition order.
    pub fn from_records<R: Record>(id: impl Into<String>, records: &[R]) -> Self {
        Self {
            id: id.into(),
            columns: R::COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(Record::cells).collect(),
        }
    }

    /// All cells of one column, by header name.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }

    /// Check that every row carries the full schema.
    ///
    /// A row is short or long when its cell count differs from the header
    /// count; a blank text cell counts as a missing field.
    pub fn check_schema(&self) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                violations.push(SchemaViolation {
                    table_id: self.id.clone(),
                    row: row_idx,
                    column: None,
                    message: format!(
                        "{}: row {} has {} cells, schema has {} columns",
                        self.id,
                        row_idx,
                        row.len(),
                        self.columns.len(),
                    ),
                });
                continue;
            }
            for (cell, column) in row.iter().zip(&self.columns) {
                if cell.is_blank() {
                    violations.push(SchemaViolation {
                        table_id: self.id.clone(),
                        row: row_idx,
                        column: Some(column.clone()),
                        message: format!("{}: row {} is missing '{}'", self.id, row_idx, column),
                    });
                }
            }
        }
        violations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct SchemaViolation {
    pub table_id: String,
    pub row: usize,
    pub column: Option<String>,
    pub message: String,
}
