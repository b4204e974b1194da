use erstats_core::chart::{Chart, ChartKind, ColorScale, Series};
use erstats_core::table::{Cell, Table};
use erstats_core::widget::Widget;
use erstats_datasets::datasets::treatment::{
    PfsPoint, patient_profiles, pfs_curves, treatments,
};

use super::{RenderContext, Section};

pub struct TreatmentEffectiveness;

impl Section for TreatmentEffectiveness {
    fn id(&self) -> &str {
        "treatment"
    }

    fn title(&self) -> &str {
        "💊 Treatment Effectiveness"
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Vec<Widget> {
        let rows = treatments();
        let names: Vec<Cell> = rows.iter().map(|t| Cell::text(&t.treatment)).collect();
        let response: Vec<f64> = rows.iter().map(|t| f64::from(t.response_rate)).collect();

        let response_chart =
            Chart::new("treatment-response", ChartKind::Bar, "ER+ Treatment Response Rates")
                .axes("Treatment", "Response Rate (%)")
                .tick_angle(45)
                .series(
                    Series::new(
                        "Response Rate (%)",
                        names.clone(),
                        rows.iter().map(|t| Cell::from(t.response_rate)).collect(),
                    )
                    .color("Response Rate (%)", response.clone(), Some(ColorScale::Greens)),
                );

        let efficacy_chart = Chart::new(
            "treatment-efficacy",
            ChartKind::Scatter,
            "Treatment Efficacy vs Side Effects",
        )
        .axes("Side Effects (1-10)", "Overall Survival (months)")
        .series(
            Series::new(
                "Treatments",
                rows.iter().map(|t| Cell::from(t.side_effects)).collect(),
                rows.iter().map(|t| Cell::from(t.os_months)).collect(),
            )
            .size(response)
            .labels(rows.iter().map(|t| t.treatment.clone()).collect())
            .color(
                "Cost (USD/month)",
                rows.iter().map(|t| f64::from(t.monthly_cost_usd)).collect(),
                Some(ColorScale::Reds),
            ),
        );

        vec![
            Widget::subheader("💊 ER+ Treatment Effectiveness Analysis"),
            Widget::Columns {
                columns: vec![
                    vec![Widget::Chart(response_chart)],
                    vec![Widget::Chart(efficacy_chart)],
                ],
            },
            Widget::Chart(pfs_chart()),
            Widget::subheader("🎯 Personalized Treatment Recommendations"),
            Widget::Table(Table::from_records("patient_profiles", patient_profiles())),
        ]
    }
}

/// One line per treatment, months on the x axis.
fn pfs_chart() -> Chart {
    let points = pfs_curves();
    let months: Vec<Cell> = points.iter().map(|p| Cell::from(p.month)).collect();

    let curve_names = points
        .first()
        .map(|p| p.curves().map(|(name, _)| name))
        .unwrap_or_default();

    curve_names.iter().enumerate().fold(
        Chart::new(
            "pfs-curves",
            ChartKind::Line,
            "Progression-Free Survival Curves by Treatment",
        )
        .axes("Month", "Progression-Free Survival (%)"),
        |chart, (idx, name)| {
            chart.series(Series::new(
                *name,
                months.clone(),
                points.iter().map(|p| curve_value(p, idx)).collect(),
            ))
        },
    )
}

fn curve_value(point: &PfsPoint, idx: usize) -> Cell {
    Cell::from(point.curves()[idx].1)
}
