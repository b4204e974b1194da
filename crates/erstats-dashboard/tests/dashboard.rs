use erstats_core::chart::ChartKind;
use erstats_core::table::Cell;
use erstats_core::widget::{BannerTone, Dashboard, Widget};
use erstats_dashboard::sections::{RenderContext, all_sections, format_pht};
use erstats_dashboard::{HostState, quick_stats, render_dashboard};
use jiff::Timestamp;

fn at(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn render(state: &HostState) -> Dashboard {
    render_dashboard(state, at("2024-06-01T01:30:00Z"))
}

fn active_tab_titles(dashboard: &Dashboard) -> Vec<String> {
    dashboard
        .widgets()
        .into_iter()
        .filter_map(|w| match w {
            Widget::Tabs(set) => Some(set.tabs.iter().filter(|t| t.active).map(|t| t.title.clone())),
            _ => None,
        })
        .flatten()
        .collect()
}

#[test]
fn dashboard_has_five_tabs_in_order() {
    let dashboard = render(&HostState::default());
    let Some(Widget::Tabs(set)) = dashboard.body.iter().find(|w| matches!(w, Widget::Tabs(_)))
    else {
        panic!("no tab set in dashboard body");
    };

    let titles: Vec<_> = set.tabs.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "🌍 Global & Philippines Data",
            "💊 Treatment Effectiveness",
            "🏥 Best Hospitals",
            "💰 Affordable Options",
            "📈 Trends Analysis",
        ]
    );
    assert!(set.tabs[0].active);
    assert_eq!(dashboard.page_title, "ER+ Statistics");
}

#[test]
fn every_section_renders_a_chart_or_table() {
    let state = HostState::default();
    let ctx = RenderContext::new(&state, at("2024-06-01T01:30:00Z"));

    for section in all_sections() {
        let body = section.render(&ctx);
        assert!(!body.is_empty(), "{} rendered nothing", section.id());

        let mut data_views = 0;
        for widget in &body {
            widget.walk(&mut |w| {
                if w.is_data_view() {
                    data_views += 1;
                }
            });
        }
        assert!(data_views > 0, "{} has no chart or table", section.id());
    }
}

#[test]
fn last_updated_is_philippine_time() {
    assert_eq!(format_pht(at("2024-06-01T01:30:00Z")), "2024-06-01 09:30 PHT");
    assert_eq!(format_pht(at("2024-12-31T20:05:59Z")), "2025-01-01 04:05 PHT");

    let dashboard = render(&HostState::default());
    let banner = dashboard.widgets().into_iter().find_map(|w| match w {
        Widget::Banner {
            tone: BannerTone::Success,
            text,
        } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(banner.as_deref(), Some("🔄 Last Updated: 2024-06-01 09:30 PHT"));
}

#[test]
fn renders_differ_only_in_timestamp() {
    let state = HostState::default();
    let first = render_dashboard(&state, at("2024-06-01T01:30:00Z"));
    let again = render_dashboard(&state, at("2024-06-01T01:30:00Z"));
    assert_eq!(first, again);

    let later = render_dashboard(&state, at("2025-03-15T10:00:00Z"));
    let a = first.widgets();
    let b = later.widgets();
    assert_eq!(a.len(), b.len());

    let differing: Vec<_> = a
        .iter()
        .zip(&b)
        .filter(|(x, y)| match (x, y) {
            // Containers differ whenever any child does; compare leaves only.
            (Widget::Tabs(_), Widget::Tabs(_)) | (Widget::Columns { .. }, Widget::Columns { .. }) => {
                false
            }
            _ => x != y,
        })
        .collect();
    assert_eq!(differing.len(), 1);
    assert!(matches!(
        differing[0].0,
        Widget::Banner {
            tone: BannerTone::Success,
            ..
        }
    ));

    let json_a = serde_json::to_string(&first).unwrap();
    let json_b = serde_json::to_string(&later).unwrap();
    assert_eq!(
        json_a.replace("2024-06-01 09:30 PHT", "<ts>"),
        json_b.replace("2025-03-15 18:00 PHT", "<ts>")
    );
}

#[test]
fn top_domestic_chart_is_positional() {
    let dashboard = render(&HostState::default());
    let chart = dashboard.chart("philippine-hospitals").unwrap();
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.series.len(), 1);

    let names: Vec<String> = chart.series[0].x.iter().map(|c| c.to_string()).collect();
    let keys = erstats_dashboard::lookup::hospital_keys();
    assert_eq!(keys.len(), 10);
    assert_eq!(names, keys[..8]);

    // Definition order, not ranked: a ranking would put BGC (92) first.
    let scores: Vec<_> = chart.series[0].y.iter().map(|c| c.as_f64().unwrap()).collect();
    assert_eq!(scores, [85.0, 92.0, 90.0, 88.0, 87.0, 83.0, 80.0, 82.0]);
}

#[test]
fn full_domestic_table_has_all_rows() {
    let dashboard = render(&HostState::default());
    let table = dashboard.table("philippine_hospitals").unwrap();
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.columns.len(), 7);
}

#[test]
fn trends_grid_plots_eleven_ascending_years() {
    let dashboard = render(&HostState::default());
    let chart = dashboard.chart("trends-grid").unwrap();
    assert_eq!(chart.kind, ChartKind::Grid);
    assert_eq!(chart.height, Some(600));

    let grid = chart.grid.as_ref().unwrap();
    assert_eq!((grid.rows, grid.cols), (2, 2));
    assert_eq!(grid.titles.len(), 4);

    assert_eq!(chart.series.len(), 5);
    let expected: Vec<Cell> = (2020..=2030).map(Cell::Number).collect();
    for series in &chart.series {
        assert_eq!(series.len(), 11, "{}", series.name);
        assert_eq!(series.x, expected, "{}", series.name);
        assert_eq!(series.y.len(), 11, "{}", series.name);
    }

    let secondary: Vec<_> = chart.series.iter().filter(|s| s.secondary_y).collect();
    assert_eq!(secondary.len(), 1);
    assert_eq!(secondary[0].panel, Some(3));
}

#[test]
fn pfs_chart_has_one_series_per_treatment() {
    let dashboard = render(&HostState::default());
    let chart = dashboard.chart("pfs-curves").unwrap();
    let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Tamoxifen",
            "Aromatase Inhibitors",
            "CDK4/6 + Hormone",
            "Chemotherapy + Hormone"
        ]
    );
    for series in &chart.series {
        assert_eq!(series.x.first(), Some(&Cell::Number(0)));
        assert_eq!(series.x.last(), Some(&Cell::Number(60)));
        assert_eq!(series.y.first(), Some(&Cell::Number(100)));
    }
}

#[test]
fn pipeline_timeline_groups_by_phase() {
    let dashboard = render(&HostState::default());
    let chart = dashboard.chart("research-pipeline").unwrap();
    assert_eq!(chart.kind, ChartKind::Timeline);

    let phases: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(phases, ["Phase I", "Phase II", "Phase III"]);

    let total: usize = chart.series.iter().map(|s| s.len()).sum();
    assert_eq!(total, 6);
    for series in &chart.series {
        assert_eq!(series.x_end.as_ref(), Some(&series.x));
    }
}

#[test]
fn out_of_range_tabs_fall_back_to_first() {
    let dashboard = render(&HostState::default().with_tab(9).with_affordability_tab(7));
    assert_eq!(
        active_tab_titles(&dashboard),
        ["🌍 Global & Philippines Data", "🆓 Free/Charity"]
    );

    let dashboard = render(&HostState::default().with_tab(3).with_affordability_tab(2));
    assert_eq!(
        active_tab_titles(&dashboard),
        ["💰 Affordable Options", "💳 Insurance Covered"]
    );
}

#[test]
fn quick_stats_has_three_metrics() {
    let metrics: Vec<_> = quick_stats()
        .into_iter()
        .filter_map(|w| match w {
            Widget::Metric(m) => Some((m.label, m.value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        metrics,
        [
            ("PH ER+ Cases (2024)".to_string(), "14,200".to_string()),
            ("Global ER+ Rate".to_string(), "70%".to_string()),
            ("5-Year Survival".to_string(), "78%".to_string()),
        ]
    );

    let dashboard = render(&HostState::default());
    assert!(dashboard.sidebar.iter().any(|w| matches!(w, Widget::Button { .. })));
}
