//! Yearly history and projections (2020 to 2030), plus the research pipeline.

use std::sync::LazyLock;

use erstats_core::snapshot::Snapshot;
use erstats_core::table::{Cell, Record, Table};
use erstats_core::widget::Metric;
use serde::{Deserialize, Serialize};

use crate::Dataset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyTrend {
    pub year: u32,
    pub cases: u32,
    pub survival_rate: u32,
    pub treatment_access: u32,
}

impl Record for YearlyTrend {
    const COLUMNS: &'static [&'static str] = &[
        "Year",
        "ER+ Cases (Philippines)",
        "Survival Rate (%)",
        "Treatment Access (%)",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.year.into(),
            self.cases.into(),
            self.survival_rate.into(),
            self.treatment_access.into(),
        ]
    }
}

/// One row per year, 2020 through 2030, ascending.
pub fn yearly_trends() -> &'static [YearlyTrend] {
    static ROWS: LazyLock<Vec<YearlyTrend>> = LazyLock::new(|| {
        let cases = [
            12000, 12500, 13200, 13800, 14200, 14800, 15400, 16000, 16600, 17200, 17800,
        ];
        let survival = [72, 74, 75, 76, 78, 79, 81, 82, 84, 85, 87];
        let access = [58, 60, 62, 63, 65, 67, 70, 72, 75, 78, 80];

        (2020..=2030)
            .zip(cases)
            .zip(survival)
            .zip(access)
            .map(
                |(((year, cases), survival_rate), treatment_access)| YearlyTrend {
                    year,
                    cases,
                    survival_rate,
                    treatment_access,
                },
            )
            .collect()
    });
    &ROWS
}

pub struct YearlyTrends;

impl Dataset for YearlyTrends {
    fn id(&self) -> &str {
        "yearly_trends"
    }

    fn title(&self) -> &str {
        "ER+ Breast Cancer Trends in Philippines"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), yearly_trends())
    }
}

pub fn projections() -> &'static Snapshot {
    static SNAPSHOT: LazyLock<Snapshot> = LazyLock::new(|| Snapshot {
        id: "projections_2030".to_string(),
        title: "🔮 2030 Projections".to_string(),
        metrics: vec![
            Metric::new("Projected Cases (2030)", "17,800").with_delta("+25% from 2024"),
            Metric::new("Projected Survival Rate", "87%").with_delta("+9% improvement"),
            Metric::new("Treatment Access", "80%").with_delta("+15% increase"),
            Metric::new("New Treatment Centers", "50+").with_delta("Geographic expansion"),
        ],
    });
    &SNAPSHOT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEntry {
    pub treatment: String,
    pub phase: String,
    pub expected_year: u32,
    pub projected_efficacy: String,
    pub cost_impact: String,
}

impl Record for PipelineEntry {
    const COLUMNS: &'static [&'static str] = &[
        "Treatment",
        "Phase",
        "Expected Availability",
        "Projected Efficacy",
        "Cost Impact",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.treatment),
            Cell::text(&self.phase),
            self.expected_year.into(),
            Cell::text(&self.projected_efficacy),
            Cell::text(&self.cost_impact),
        ]
    }
}

pub fn research_pipeline() -> &'static [PipelineEntry] {
    static ROWS: LazyLock<Vec<PipelineEntry>> = LazyLock::new(|| {
        [
            ("CAR-T Cell Therapy", "Phase I", 2028, "90%", "High"),
            ("Immunotherapy Combinations", "Phase II", 2026, "85%", "Medium"),
            ("Precision Medicine", "Phase II", 2025, "88%", "High"),
            ("AI-Guided Treatment", "Phase I", 2027, "92%", "Medium"),
            ("Liquid Biopsies", "Phase III", 2024, "75%", "Low"),
            ("Novel CDK Inhibitors", "Phase II", 2025, "86%", "Medium"),
        ]
        .into_iter()
        .map(
            |(treatment, phase, expected_year, projected_efficacy, cost_impact)| PipelineEntry {
                treatment: treatment.to_string(),
                phase: phase.to_string(),
                expected_year,
                projected_efficacy: projected_efficacy.to_string(),
                cost_impact: cost_impact.to_string(),
            },
        )
        .collect()
    });
    &ROWS
}

pub struct ResearchPipeline;

impl Dataset for ResearchPipeline {
    fn id(&self) -> &str {
        "research_pipeline"
    }

    fn title(&self) -> &str {
        "Research Pipeline & Future Treatments"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), research_pipeline())
    }
}
