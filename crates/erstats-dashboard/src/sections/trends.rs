use erstats_core::chart::{Chart, ChartKind, Series};
use erstats_core::table::{Cell, Table};
use erstats_core::widget::Widget;
use erstats_datasets::datasets::trends::{projections, research_pipeline, yearly_trends};

use super::{RenderContext, Section};

pub const GRID_TITLES: [&str; 4] = [
    "ER+ Cases Growth",
    "Survival Rate Improvement",
    "Treatment Access Expansion",
    "Combined Trends",
];

pub struct TrendsAnalysis;

impl Section for TrendsAnalysis {
    fn id(&self) -> &str {
        "trends"
    }

    fn title(&self) -> &str {
        "📈 Trends Analysis"
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Vec<Widget> {
        let projections = projections();

        vec![
            Widget::subheader("📈 ER+ Breast Cancer Trends & Projections"),
            Widget::Chart(trends_grid()),
            Widget::heading(3, &projections.title),
            Widget::Columns {
                columns: projections
                    .metrics
                    .iter()
                    .map(|m| vec![Widget::Metric(m.clone())])
                    .collect(),
            },
            Widget::heading(3, "🔬 Research Pipeline & Future Treatments"),
            Widget::Chart(pipeline_chart()),
            Widget::Table(Table::from_records(
                "research_pipeline",
                research_pipeline(),
            )),
        ]
    }
}

/// 2×2 panels; the last one overlays survival on a secondary axis.
fn trends_grid() -> Chart {
    let rows = yearly_trends();
    let years: Vec<Cell> = rows.iter().map(|r| Cell::from(r.year)).collect();
    let cases: Vec<Cell> = rows.iter().map(|r| Cell::from(r.cases)).collect();
    let survival: Vec<Cell> = rows.iter().map(|r| Cell::from(r.survival_rate)).collect();
    let access: Vec<Cell> = rows.iter().map(|r| Cell::from(r.treatment_access)).collect();

    Chart::new(
        "trends-grid",
        ChartKind::Grid,
        "ER+ Breast Cancer Trends in Philippines",
    )
    .height(600)
    .grid(2, 2, &GRID_TITLES)
    .series(
        Series::new("ER+ Cases", years.clone(), cases.clone())
            .line_color("red")
            .panel(0),
    )
    .series(
        Series::new("Survival Rate", years.clone(), survival.clone())
            .line_color("green")
            .panel(1),
    )
    .series(
        Series::new("Treatment Access", years.clone(), access)
            .line_color("blue")
            .panel(2),
    )
    .series(
        Series::new("Cases", years.clone(), cases)
            .line_color("red")
            .panel(3),
    )
    .series(
        Series::new("Survival %", years, survival)
            .line_color("green")
            .panel(3)
            .secondary_y(),
    )
}

/// Each entry is a zero-width interval at its expected year, one series per
/// phase in order of first appearance.
fn pipeline_chart() -> Chart {
    let rows = research_pipeline();

    let mut phases: Vec<&str> = Vec::new();
    for row in rows {
        if !phases.contains(&row.phase.as_str()) {
            phases.push(&row.phase);
        }
    }

    phases.into_iter().fold(
        Chart::new(
            "research-pipeline",
            ChartKind::Timeline,
            "ER+ Treatment Research Pipeline",
        )
        .axes("Expected Availability", "Treatment"),
        |chart, phase| {
            let entries: Vec<_> = rows.iter().filter(|r| r.phase == phase).collect();
            let years: Vec<Cell> = entries.iter().map(|r| Cell::from(r.expected_year)).collect();
            chart.series(
                Series::new(
                    phase,
                    years.clone(),
                    entries.iter().map(|r| Cell::text(&r.treatment)).collect(),
                )
                .x_end(years),
            )
        },
    )
}
