use erstats_core::widget::Widget;
use erstats_dashboard::lookup::{
    DETAIL_HEADING, hospital_detail_widgets, hospital_keys, lookup_hospital, resolve_selection,
};
use erstats_dashboard::{HostState, render_dashboard};

fn flatten(widgets: &[Widget]) -> Vec<&Widget> {
    let mut out = Vec::new();
    for widget in widgets {
        widget.walk(&mut |w| out.push(w));
    }
    out
}

fn metric_values(widgets: &[Widget]) -> Vec<(String, String)> {
    flatten(widgets)
        .into_iter()
        .filter_map(|w| match w {
            Widget::Metric(m) => Some((m.label.clone(), m.value.clone())),
            _ => None,
        })
        .collect()
}

fn fields(widgets: &[Widget]) -> Vec<(String, String)> {
    flatten(widgets)
        .into_iter()
        .filter_map(|w| match w {
            Widget::Field { label, value } => Some((label.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn documented_hospital_shows_contact_block() {
    let widgets = hospital_detail_widgets(Some("Philippine General Hospital"));

    let fields = fields(&widgets);
    assert!(fields.contains(&("Contact".to_string(), "(02) 8554-8400".to_string())));
    assert!(fields.contains(&("Website".to_string(), "www.pgh.gov.ph".to_string())));
    assert!(fields.contains(&(
        "Services".to_string(),
        "Free/Charity Care, Genetic Testing, Clinical Trials, Multidisciplinary Team".to_string()
    )));
    assert!(fields.contains(&(
        "Special Programs".to_string(),
        "PCSO Medical Assistance, Malasakit Center".to_string()
    )));

    let metrics = metric_values(&widgets);
    assert!(metrics.contains(&("ER+ Specialty Score".to_string(), "85/100".to_string())));
    assert!(metrics.contains(&("Waiting Time".to_string(), "8 weeks".to_string())));
}

#[test]
fn undocumented_hospital_omits_detail_silently() {
    let widgets = hospital_detail_widgets(Some("The Medical City"));

    let metrics = metric_values(&widgets);
    assert_eq!(
        metrics,
        [
            ("ER+ Specialty Score", "88/100"),
            ("Survival Rate", "81%"),
            ("Technology Level", "9/10"),
            ("Monthly Cases", "95"),
            ("Waiting Time", "3 weeks"),
            ("Location", "Pasig"),
        ]
        .map(|(l, v)| (l.to_string(), v.to_string()))
    );

    assert!(fields(&widgets).is_empty());
    assert!(!flatten(&widgets).iter().any(|w| matches!(
        w,
        Widget::Heading { text, .. } if text == DETAIL_HEADING
    )));

    let json = serde_json::to_string(&widgets).unwrap();
    assert!(!json.contains("Contact"));
    assert!(!json.contains("Special Programs"));
}

#[test]
fn contact_reaches_the_full_render() {
    let now = "2024-06-01T01:30:00Z".parse().unwrap();
    let state = HostState::default().with_hospital("Philippine General Hospital");
    let json = serde_json::to_string(&render_dashboard(&state, now)).unwrap();
    assert!(json.contains("(02) 8554-8400"));

    let state = HostState::default().with_hospital("The Medical City");
    let json = serde_json::to_string(&render_dashboard(&state, now)).unwrap();
    assert!(!json.contains("(02) 8554-8400"));
    assert!(!json.contains("(02) 7789-7700"));
}

#[test]
fn dropdown_offers_every_domestic_hospital() {
    let widgets = hospital_detail_widgets(Some("Asian Hospital"));
    let Some(Widget::Select(select)) = widgets.first() else {
        panic!("expected the dropdown first");
    };
    assert_eq!(select.options, hospital_keys());
    assert_eq!(select.selected, "Asian Hospital");
}

#[test]
fn missing_or_unknown_selection_defaults_to_first_hospital() {
    let default = resolve_selection(None).unwrap();
    assert_eq!(default.hospital.hospital, "Philippine General Hospital");
    assert!(default.detail.is_some());

    let unknown = resolve_selection(Some("Nowhere Clinic")).unwrap();
    assert_eq!(unknown.hospital.hospital, "Philippine General Hospital");
}

#[test]
fn lookup_only_hits_domestic_keys() {
    assert!(lookup_hospital("Mayo Clinic (USA)").is_none());

    let bgc = lookup_hospital("St. Luke's Medical Center - BGC").unwrap();
    assert_eq!(bgc.detail.map(|d| d.contact.as_str()), Some("(02) 7789-7700"));

    let davao = lookup_hospital("Southern Philippines Medical Center").unwrap();
    assert!(davao.detail.is_none());
}
