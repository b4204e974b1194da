use erstats_core::chart::{Chart, ChartKind};
use erstats_core::snapshot::Snapshot;
use erstats_core::table::Table;
use erstats_core::widget::{Dashboard, Tab, TabSet, Widget};

fn sample() -> Dashboard {
    Dashboard {
        page_title: "Sample".to_string(),
        body: vec![
            Widget::header("Top"),
            Widget::Tabs(TabSet {
                id: "tabs".to_string(),
                tabs: vec![
                    Tab {
                        title: "One".to_string(),
                        active: true,
                        body: vec![Widget::Chart(Chart::new("c1", ChartKind::Bar, "C1"))],
                    },
                    Tab {
                        title: "Two".to_string(),
                        active: false,
                        body: vec![Widget::Columns {
                            columns: vec![
                                vec![Widget::metric("a", "1")],
                                vec![Widget::Table(Table {
                                    id: "t1".to_string(),
                                    columns: vec![],
                                    rows: vec![],
                                })],
                            ],
                        }],
                    },
                ],
            }),
        ],
        sidebar: vec![Widget::Divider],
    }
}

#[test]
fn walk_reaches_nested_widgets() {
    let dashboard = sample();
    assert_eq!(dashboard.widgets().len(), 6);
    assert!(dashboard.chart("c1").is_some());
    assert!(dashboard.table("t1").is_some());
    assert!(dashboard.chart("t1").is_none());
}

#[test]
fn widgets_serialize_with_a_widget_tag() {
    let json = serde_json::to_value(Widget::metric("Cases", "14,200")).unwrap();
    assert_eq!(json["widget"], "metric");
    assert_eq!(json["label"], "Cases");

    let chart = serde_json::to_value(Widget::Chart(Chart::new("c", ChartKind::Grid, "G"))).unwrap();
    assert_eq!(chart["widget"], "chart");
    assert_eq!(chart["kind"], "grid");

    let divider = serde_json::to_value(Widget::Divider).unwrap();
    assert_eq!(divider, serde_json::json!({ "widget": "divider" }));

    let back: Dashboard = serde_json::from_value(serde_json::to_value(sample()).unwrap()).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn snapshot_rejects_duplicate_labels() {
    let ok = Snapshot::new("s", "S", &[("A", "1"), ("B", "2")]);
    assert!(ok.check_labels().is_empty());
    assert_eq!(ok.get("B"), Some("2"));
    assert_eq!(ok.widgets().len(), 2);

    let dup = Snapshot::new("s", "S", &[("A", "1"), ("B", "2"), ("A", "3")]);
    let violations = dup.check_labels();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].row, 2);
}
