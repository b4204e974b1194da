use erstats_core::chart::{Chart, ChartKind, Series};
use erstats_core::table::Cell;
use erstats_dashboard::{HostState, render_dashboard};
use erstats_export::plotly::figure;
use serde_json::json;

fn chart(id: &str) -> Chart {
    let now = "2024-06-01T01:30:00Z".parse().unwrap();
    render_dashboard(&HostState::default(), now)
        .chart(id)
        .cloned()
        .unwrap()
}

#[test]
fn bar_chart_carries_color_scale_and_tick_angle() {
    let fig = figure(&chart("treatment-response"));

    let trace = &fig["data"][0];
    assert_eq!(trace["type"], "bar");
    assert_eq!(trace["marker"]["colorscale"], "Greens");
    assert_eq!(trace["marker"]["showscale"], true);
    assert_eq!(fig["layout"]["xaxis"]["tickangle"], 45);
    assert_eq!(fig["layout"]["title"]["text"], "ER+ Treatment Response Rates");
}

#[test]
fn bubble_chart_scales_marker_area() {
    let fig = figure(&chart("treatment-efficacy"));

    let marker = &fig["data"][0]["marker"];
    assert_eq!(fig["data"][0]["mode"], "markers");
    assert_eq!(marker["sizemode"], "area");
    assert!(marker["sizeref"].as_f64().unwrap() > 0.0);
    assert_eq!(marker["colorscale"], "Reds");
    assert!(fig["data"][0]["hovertext"].is_array());
}

#[test]
fn grid_maps_panels_to_axes() {
    let fig = figure(&chart("trends-grid"));

    let data = fig["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["xaxis"], "x");
    assert_eq!(data[0]["yaxis"], "y");
    assert_eq!(data[1]["yaxis"], "y2");
    assert_eq!(data[3]["xaxis"], "x4");
    assert_eq!(data[3]["yaxis"], "y4");
    assert_eq!(data[4]["xaxis"], "x4");
    assert_eq!(data[4]["yaxis"], "y8");
    assert_eq!(data[0]["line"]["color"], "red");

    let layout = &fig["layout"];
    assert_eq!(layout["height"], 600);
    assert_eq!(layout["yaxis8"]["overlaying"], "y4");
    assert_eq!(layout["yaxis8"]["side"], "right");
    assert_eq!(layout["annotations"].as_array().unwrap().len(), 4);
    assert_eq!(layout["annotations"][0]["text"], "ER+ Cases Growth");

    // Top-left panel sits in the upper half.
    let y = layout["yaxis"]["domain"].as_array().unwrap();
    assert!(y[0].as_f64().unwrap() > 0.5);
}

#[test]
fn timeline_draws_intervals_from_base() {
    let fig = figure(&chart("research-pipeline"));

    let data = fig["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    for trace in data {
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["type"], "bar");
        let widths = trace["x"].as_array().unwrap();
        assert!(widths.iter().all(|w| w.as_f64() == Some(0.0)));
        assert_eq!(
            trace["base"].as_array().unwrap().len(),
            trace["y"].as_array().unwrap().len()
        );
    }
}

#[test]
fn line_with_text_labels_points() {
    let chart = Chart::new("steps", ChartKind::Line, "Steps").series(
        Series::new(
            "Days",
            vec![Cell::Number(1), Cell::Number(2)],
            vec![Cell::Number(3), Cell::Number(7)],
        )
        .text(vec!["Apply".into(), "Review".into()]),
    );
    let fig = figure(&chart);

    assert_eq!(fig["data"][0]["mode"], "lines+markers+text");
    assert_eq!(fig["data"][0]["text"], json!(["Apply", "Review"]));
    assert_eq!(fig["data"][0]["x"], json!([1, 2]));
}
