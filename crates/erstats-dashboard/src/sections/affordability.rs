use erstats_core::chart::{Chart, ChartKind, ColorScale, Series};
use erstats_core::table::{Cell, Table};
use erstats_core::widget::{Tab, TabSet, Widget};
use erstats_datasets::datasets::affordability::{
    INSURANCE_TIPS, assistance_process, free_hospitals, government_programs, low_cost_hospitals,
    philhealth_coverage,
};
use tracing::warn;

use super::{RenderContext, Section};

pub const SUB_TABS: [&str; 4] = [
    "🆓 Free/Charity",
    "💵 Low Cost",
    "💳 Insurance Covered",
    "🏛️ Government",
];

pub struct AffordableOptions;

impl Section for AffordableOptions {
    fn id(&self) -> &str {
        "affordability"
    }

    fn title(&self) -> &str {
        "💰 Affordable Options"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Widget> {
        let requested = ctx.state.affordability_tab;
        let active = if requested < SUB_TABS.len() {
            requested
        } else {
            warn!(requested, "affordability tab out of range, showing the first tab");
            0
        };

        let bodies = [free_care(), low_cost(), insurance(), government()];
        let tabs = SUB_TABS
            .iter()
            .zip(bodies)
            .enumerate()
            .map(|(idx, (title, body))| Tab {
                title: title.to_string(),
                active: idx == active,
                body,
            })
            .collect();

        vec![
            Widget::subheader("💰 Most Affordable ER+ Treatment Options"),
            Widget::Tabs(TabSet {
                id: "affordability-tabs".to_string(),
                tabs,
            }),
        ]
    }
}

fn free_care() -> Vec<Widget> {
    let rows = free_hospitals();
    let chart = Chart::new(
        "free-quality",
        ChartKind::Bar,
        "Quality Scores of Free Treatment Centers",
    )
    .axes("Hospital", "Quality Score")
    .tick_angle(45)
    .series(
        Series::new(
            "Quality Score",
            rows.iter().map(|h| Cell::text(&h.hospital)).collect(),
            rows.iter().map(|h| Cell::from(h.quality_score)).collect(),
        )
        .color(
            "Quality Score",
            rows.iter().map(|h| f64::from(h.quality_score)).collect(),
            Some(ColorScale::Greens),
        ),
    );

    vec![
        Widget::heading(3, "🆓 Free and Charity Care Options"),
        Widget::Table(Table::from_records("free_hospitals", rows)),
        Widget::Chart(chart),
    ]
}

fn low_cost() -> Vec<Widget> {
    let rows = low_cost_hospitals();
    let chart = Chart::new(
        "low-cost-quality",
        ChartKind::Scatter,
        "Cost vs Quality - Low Cost Private Hospitals",
    )
    .axes("Average Cost (PHP)", "Quality Score")
    .series(
        Series::new(
            "Hospitals",
            rows.iter().map(|h| Cell::from(h.average_cost_php)).collect(),
            rows.iter().map(|h| Cell::from(h.quality_score)).collect(),
        )
        .labels(rows.iter().map(|h| h.hospital.clone()).collect())
        .size(rows.iter().map(|h| f64::from(h.quality_score)).collect()),
    );

    vec![
        Widget::heading(3, "💵 Low-Cost Private Options"),
        Widget::Chart(chart),
        Widget::Table(Table::from_records("low_cost_hospitals", rows)),
    ]
}

fn insurance() -> Vec<Widget> {
    let rows = philhealth_coverage();
    let chart = Chart::new(
        "philhealth-coverage",
        ChartKind::Bar,
        "PhilHealth Coverage for ER+ Treatments",
    )
    .axes("Treatment Package", "PhilHealth Coverage (PHP)")
    .tick_angle(45)
    .series(Series::new(
        "PhilHealth Coverage (PHP)",
        rows.iter().map(|p| Cell::text(&p.package)).collect(),
        rows.iter().map(|p| Cell::from(p.philhealth_php)).collect(),
    ));

    vec![
        Widget::heading(3, "💳 PhilHealth and Insurance Coverage"),
        Widget::Chart(chart),
        Widget::Table(Table::from_records("philhealth_coverage", rows)),
        Widget::heading(4, "📋 Insurance Optimization Tips"),
        Widget::Bullets {
            title: Some("To Maximize Coverage:".to_string()),
            items: INSURANCE_TIPS.iter().map(|t| t.to_string()).collect(),
        },
    ]
}

fn government() -> Vec<Widget> {
    let steps = assistance_process();
    let chart = Chart::new(
        "assistance-timeline",
        ChartKind::Line,
        "Government Assistance Timeline",
    )
    .axes("Step", "Timeline (days)")
    .series(
        Series::new(
            "Timeline (days)",
            steps.iter().map(|s| Cell::from(s.step)).collect(),
            steps.iter().map(|s| Cell::from(s.timeline_days)).collect(),
        )
        .text(steps.iter().map(|s| s.process.clone()).collect()),
    );

    vec![
        Widget::heading(3, "🏛️ Government Assistance Programs"),
        Widget::Table(Table::from_records(
            "government_programs",
            government_programs(),
        )),
        Widget::heading(4, "📊 Assistance Application Process"),
        Widget::Chart(chart),
    ]
}
