use erstats_core::chart::{Chart, ChartKind, ColorScale, Series};
use erstats_core::table::{Cell, Table};
use erstats_core::widget::Widget;
use erstats_datasets::datasets::hospitals::{international_hospitals, philippine_hospitals};

use super::{RenderContext, Section};
use crate::lookup::hospital_detail_widgets;

/// How many domestic rows the ranking chart shows, taken by position.
pub const TOP_DOMESTIC: usize = 8;

pub struct BestHospitals;

impl Section for BestHospitals {
    fn id(&self) -> &str {
        "hospitals"
    }

    fn title(&self) -> &str {
        "🏥 Best Hospitals"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Widget> {
        let mut widgets = vec![
            Widget::subheader("🏥 Top Hospitals for ER+ Breast Cancer Treatment"),
            Widget::heading(3, "🌟 World's Best ER+ Treatment Centers"),
            Widget::Chart(international_chart()),
            Widget::heading(3, "🇵🇭 Philippines Top ER+ Treatment Centers"),
            Widget::Chart(domestic_chart()),
            Widget::Table(Table::from_records(
                "philippine_hospitals",
                philippine_hospitals(),
            )),
            Widget::heading(3, "📋 Detailed Hospital Information"),
        ];
        widgets.extend(hospital_detail_widgets(
            ctx.state.selected_hospital.as_deref(),
        ));
        widgets
    }
}

fn international_chart() -> Chart {
    let rows = international_hospitals();
    Chart::new(
        "international-hospitals",
        ChartKind::Scatter,
        "International ER+ Treatment Centers Performance",
    )
    .axes("ER+ Specialty Score", "5-Year Survival Rate")
    .series(
        Series::new(
            "Hospitals",
            rows.iter().map(|h| Cell::from(h.specialty_score)).collect(),
            rows.iter().map(|h| Cell::from(h.survival_rate)).collect(),
        )
        .size(rows.iter().map(|h| f64::from(h.annual_patients)).collect())
        .labels(rows.iter().map(|h| h.hospital.clone()).collect())
        .color(
            "Research Publications",
            rows.iter().map(|h| f64::from(h.publications)).collect(),
            Some(ColorScale::Blues),
        ),
    )
}

/// The first rows in definition order, not the highest scores.
fn domestic_chart() -> Chart {
    let top: Vec<_> = philippine_hospitals().iter().take(TOP_DOMESTIC).collect();
    Chart::new(
        "philippine-hospitals",
        ChartKind::Bar,
        "Top Philippine Hospitals - ER+ Specialty Score",
    )
    .axes("Hospital", "ER+ Specialty Score")
    .tick_angle(45)
    .series(
        Series::new(
            "ER+ Specialty Score",
            top.iter().map(|h| Cell::text(&h.hospital)).collect(),
            top.iter().map(|h| Cell::from(h.specialty_score)).collect(),
        )
        .color(
            "Survival Rate (%)",
            top.iter().map(|h| f64::from(h.survival_rate)).collect(),
            Some(ColorScale::Greens),
        ),
    )
}
