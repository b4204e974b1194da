use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::chart::Chart;
use crate::table::Table;

/// One node of the rendered dashboard.
///
/// Serialized with a `widget` tag so hosts (and templates) can dispatch on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "widget", rename_all = "snake_case")]
#[ts(export)]
pub enum Widget {
    Header { text: String },
    Subheader { text: String },
    /// Section heading below subheader level (3 or 4).
    Heading { level: u8, text: String },
    Caption { text: String },
    Text { text: String },
    /// A bold label followed by its value, e.g. a contact line.
    Field { label: String, value: String },
    Bullets { title: Option<String>, items: Vec<String> },
    Metric(Metric),
    Table(Table),
    Chart(Chart),
    Tabs(TabSet),
    Columns { columns: Vec<Vec<Widget>> },
    Select(Select),
    Banner { tone: BannerTone, text: String },
    Button { label: String, action: ButtonAction },
    Divider,
}

impl Widget {
    pub fn header(text: impl Into<String>) -> Self {
        Widget::Header { text: text.into() }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Widget::Subheader { text: text.into() }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Widget::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn caption(text: impl Into<String>) -> Self {
        Widget::Caption { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Widget::Text { text: text.into() }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Widget::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn metric(label: impl Into<String>, value: impl Into<String>) -> Self {
        Widget::Metric(Metric::new(label, value))
    }

    pub fn banner(tone: BannerTone, text: impl Into<String>) -> Self {
        Widget::Banner {
            tone,
            text: text.into(),
        }
    }

    /// True for the widgets that carry data: charts and tables.
    pub fn is_data_view(&self) -> bool {
        matches!(self, Widget::Chart(_) | Widget::Table(_))
    }

    /// Depth-first walk over this widget and everything nested in it.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Widget)) {
        visit(self);
        match self {
            Widget::Tabs(set) => {
                for tab in &set.tabs {
                    for child in &tab.body {
                        child.walk(visit);
                    }
                }
            }
            Widget::Columns { columns } => {
                for child in columns.iter().flatten() {
                    child.walk(visit);
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TabSet {
    pub id: String,
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tab {
    pub title: String,
    pub active: bool,
    pub body: Vec<Widget>,
}

/// A dropdown over a finite set of keys; `selected` is always one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Select {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BannerTone {
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ButtonAction {
    /// Re-render the dashboard from the same literals.
    Refresh,
    /// Open the full dashboard from the sidebar.
    OpenDashboard,
}

/// A complete render: the main page body plus the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dashboard {
    pub page_title: String,
    pub body: Vec<Widget>,
    pub sidebar: Vec<Widget>,
}

impl Dashboard {
    /// Every widget in the body, depth first.
    pub fn widgets(&self) -> Vec<&Widget> {
        let mut out = Vec::new();
        for widget in &self.body {
            widget.walk(&mut |w| out.push(w));
        }
        out
    }

    pub fn charts(&self) -> Vec<&Chart> {
        self.widgets()
            .into_iter()
            .filter_map(|w| match w {
                Widget::Chart(chart) => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn chart(&self, id: &str) -> Option<&Chart> {
        self.charts().into_iter().find(|c| c.id == id)
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.widgets().into_iter().find_map(|w| match w {
            Widget::Table(table) if table.id == id => Some(table),
            _ => None,
        })
    }
}
