use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::table::SchemaViolation;
use crate::widget::{Metric, Widget};

/// A flat, ordered label → display value mapping, shown as a metric panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    pub id: String,
    pub title: String,
    pub metrics: Vec<Metric>,
}

impl Snapshot {
    pub fn new(id: &str, title: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            metrics: entries
                .iter()
                .map(|(label, value)| Metric::new(*label, *value))
                .collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }

    /// One metric widget per entry, in definition order.
    pub fn widgets(&self) -> Vec<Widget> {
        self.metrics.iter().cloned().map(Widget::Metric).collect()
    }

    /// Labels must be unique within a snapshot.
    pub fn check_labels(&self) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        for (idx, metric) in self.metrics.iter().enumerate() {
            if self.metrics[..idx].iter().any(|m| m.label == metric.label) {
                violations.push(SchemaViolation {
                    table_id: self.id.clone(),
                    row: idx,
                    column: Some(metric.label.clone()),
                    message: format!("{}: duplicate label '{}'", self.id, metric.label),
                });
            }
        }
        violations
    }
}
