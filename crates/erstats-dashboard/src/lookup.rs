//! Hospital detail lookup.
//!
//! The dropdown offers every domestic hospital, but only some of them have an
//! extended detail record. A miss is not an error: the base figures render
//! and the detail block is left out.

use erstats_core::widget::{Select, Widget};
use erstats_datasets::datasets::hospitals::{
    HospitalDetail, PhilippineHospital, hospital_detail, philippine_hospital,
    philippine_hospitals,
};
use tracing::{info, warn};

pub const SELECT_ID: &str = "hospital-detail";
pub const SELECT_LABEL: &str = "Select Hospital for Details:";
pub const DETAIL_HEADING: &str = "Hospital Details";

/// A domestic hospital together with its detail record, when one exists.
#[derive(Debug, Clone, Copy)]
pub struct HospitalLookup {
    pub hospital: &'static PhilippineHospital,
    pub detail: Option<&'static HospitalDetail>,
}

/// Valid dropdown keys, in definition order.
pub fn hospital_keys() -> Vec<String> {
    philippine_hospitals()
        .iter()
        .map(|h| h.hospital.clone())
        .collect()
}

pub fn lookup_hospital(name: &str) -> Option<HospitalLookup> {
    let hospital = philippine_hospital(name)?;
    Some(HospitalLookup {
        hospital,
        detail: hospital_detail(name),
    })
}

/// Resolve the host's selection to a lookup, defaulting to the first hospital.
///
/// A name outside the dropdown's key set falls back to the default as well.
pub fn resolve_selection(selected: Option<&str>) -> Option<HospitalLookup> {
    if let Some(name) = selected {
        if let Some(found) = lookup_hospital(name) {
            return Some(found);
        }
        warn!(hospital = name, "unknown hospital selected, using the first entry");
    }
    let first = philippine_hospitals().first()?;
    lookup_hospital(&first.hospital)
}

/// The dropdown plus the widgets for the selected hospital.
pub fn hospital_detail_widgets(selected: Option<&str>) -> Vec<Widget> {
    let Some(lookup) = resolve_selection(selected) else {
        return Vec::new();
    };

    let mut widgets = vec![Widget::Select(Select {
        id: SELECT_ID.to_string(),
        label: SELECT_LABEL.to_string(),
        options: hospital_keys(),
        selected: lookup.hospital.hospital.clone(),
    })];
    widgets.extend(detail_widgets(&lookup));
    widgets
}

/// Base metrics always; the contact block only when a detail record exists.
pub fn detail_widgets(lookup: &HospitalLookup) -> Vec<Widget> {
    let h = lookup.hospital;
    let mut widgets = vec![Widget::Columns {
        columns: vec![
            vec![
                Widget::metric("ER+ Specialty Score", format!("{}/100", h.specialty_score)),
                Widget::metric("Survival Rate", format!("{}%", h.survival_rate)),
            ],
            vec![
                Widget::metric("Technology Level", format!("{}/10", h.technology_level)),
                Widget::metric("Monthly Cases", h.monthly_cases.to_string()),
            ],
            vec![
                Widget::metric("Waiting Time", format!("{} weeks", h.waiting_weeks)),
                Widget::metric("Location", &h.location),
            ],
        ],
    }];

    match lookup.detail {
        Some(detail) => {
            widgets.push(Widget::heading(4, DETAIL_HEADING));
            widgets.push(Widget::field("Contact", &detail.contact));
            widgets.push(Widget::field("Website", &detail.website));
            widgets.push(Widget::field("Services", detail.services.join(", ")));
            widgets.push(Widget::field("Special Programs", &detail.special_programs));
        }
        None => info!(hospital = %h.hospital, "no extended detail on record"),
    }

    widgets
}
