use erstats_core::chart::{Chart, ChartKind, Series};
use erstats_core::table::Cell;
use erstats_core::widget::{BannerTone, ButtonAction, Widget};
use erstats_datasets::datasets::prevalence::{
    country_comparison, global_snapshot, philippines_snapshot, regional_distribution,
};

use super::{RenderContext, Section};

pub const DATA_SOURCE: &str = "📡 Data Source: DOH, WHO, Global Cancer Observatory";

/// Philippines vs worldwide figures, side by side.
pub struct GlobalComparison;

impl Section for GlobalComparison {
    fn id(&self) -> &str {
        "global"
    }

    fn title(&self) -> &str {
        "🌍 Global & Philippines Data"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Widget> {
        vec![
            Widget::subheader("🌍 ER+ Breast Cancer Global vs Philippines Statistics"),
            Widget::Columns {
                columns: vec![philippines_column(), global_column()],
            },
            Widget::Divider,
            Widget::Columns {
                columns: vec![
                    vec![Widget::banner(
                        BannerTone::Success,
                        format!("🔄 Last Updated: {}", ctx.updated_at),
                    )],
                    vec![Widget::banner(BannerTone::Info, DATA_SOURCE)],
                    vec![Widget::Button {
                        label: "🔄 Refresh Data".to_string(),
                        action: ButtonAction::Refresh,
                    }],
                ],
            },
        ]
    }
}

fn philippines_column() -> Vec<Widget> {
    let snapshot = philippines_snapshot();
    let regions = regional_distribution();

    let chart = Chart::new("regional-cases", ChartKind::Bar, "ER+ Cases by Philippine Region")
        .axes("Region", "ER+ Cases")
        .series(
            Series::new(
                "ER+ Cases",
                regions.iter().map(|r| Cell::text(&r.region)).collect(),
                regions.iter().map(|r| Cell::from(r.cases)).collect(),
            )
            .color(
                "Treatment Centers",
                regions.iter().map(|r| f64::from(r.treatment_centers)).collect(),
                None,
            ),
        );

    let mut widgets = vec![Widget::heading(3, &snapshot.title)];
    widgets.extend(snapshot.widgets());
    widgets.push(Widget::heading(3, "Regional Distribution"));
    widgets.push(Widget::Chart(chart));
    widgets
}

fn global_column() -> Vec<Widget> {
    let snapshot = global_snapshot();
    let countries = country_comparison();

    let chart = Chart::new(
        "country-survival",
        ChartKind::Scatter,
        "Treatment Access vs Survival Rate by Country",
    )
    .axes("Treatment Access", "ER+ Survival Rate")
    .series(
        Series::new(
            "Countries",
            countries.iter().map(|c| Cell::from(c.treatment_access)).collect(),
            countries.iter().map(|c| Cell::from(c.survival_rate)).collect(),
        )
        .size(countries.iter().map(|c| f64::from(c.marker_weight)).collect())
        .labels(countries.iter().map(|c| c.country.clone()).collect()),
    );

    let mut widgets = vec![Widget::heading(3, &snapshot.title)];
    widgets.extend(snapshot.widgets());
    widgets.push(Widget::heading(3, "Country Comparison"));
    widgets.push(Widget::Chart(chart));
    widgets
}
