use erstats_datasets::datasets::affordability::{INSURANCE_TIPS, assistance_process};
use erstats_datasets::datasets::hospitals::{
    check_detail_keys, hospital_detail, hospital_details, philippine_hospital,
    philippine_hospitals,
};
use erstats_datasets::datasets::prevalence::{philippines_snapshot, quick_stats};
use erstats_datasets::datasets::treatment::pfs_curves;
use erstats_datasets::datasets::trends::{projections, yearly_trends};
use erstats_datasets::error::DatasetError;
use erstats_datasets::{all_datasets, ensure_valid, get_dataset, require_dataset, validate_all};

#[test]
fn every_record_set_is_complete() {
    let violations = validate_all();
    assert!(violations.is_empty(), "{violations:?}");
    assert_eq!(ensure_valid().unwrap(), 14);
}

#[test]
fn row_counts_match_the_published_tables() {
    let counts: Vec<(String, usize)> = all_datasets()
        .iter()
        .map(|d| (d.id().to_string(), d.table().rows.len()))
        .collect();

    let expected = [
        ("regional_distribution", 6),
        ("country_comparison", 6),
        ("treatments", 5),
        ("pfs_curves", 11),
        ("patient_profiles", 5),
        ("international_hospitals", 6),
        ("philippine_hospitals", 10),
        ("free_hospitals", 8),
        ("low_cost_hospitals", 6),
        ("philhealth_coverage", 6),
        ("government_programs", 6),
        ("assistance_process", 5),
        ("yearly_trends", 11),
        ("research_pipeline", 6),
    ];
    assert_eq!(
        counts,
        expected.map(|(id, n)| (id.to_string(), n)).to_vec()
    );
}

#[test]
fn registry_lookup() {
    let set = get_dataset("philippine_hospitals").unwrap();
    assert_eq!(set.table().columns.len(), 7);
    assert!(get_dataset("nope").is_none());

    match require_dataset("nope") {
        Err(DatasetError::UnknownDataset(id)) => assert_eq!(id, "nope"),
        other => panic!("expected UnknownDataset, got {:?}", other.map(|d| d.id().to_string())),
    }
}

#[test]
fn detail_mapping_is_sparse_and_keyed_by_domestic_names() {
    assert!(check_detail_keys().is_empty());
    assert_eq!(hospital_details().len(), 2);
    for name in hospital_details().keys() {
        assert!(philippine_hospital(name).is_some(), "{name}");
    }

    let pgh = hospital_detail("Philippine General Hospital").unwrap();
    assert_eq!(pgh.contact, "(02) 8554-8400");
    assert_eq!(pgh.services.len(), 4);
    assert!(hospital_detail("The Medical City").is_none());
}

#[test]
fn domestic_hospitals_keep_definition_order() {
    let names: Vec<_> = philippine_hospitals()
        .iter()
        .map(|h| h.hospital.as_str())
        .collect();
    assert_eq!(names[0], "Philippine General Hospital");
    assert_eq!(names[1], "St. Luke's Medical Center - BGC");
    assert_eq!(names.len(), 10);
}

#[test]
fn years_ascend_without_gaps() {
    let years: Vec<u32> = yearly_trends().iter().map(|r| r.year).collect();
    assert_eq!(years, (2020..=2030).collect::<Vec<_>>());

    let months: Vec<u32> = pfs_curves().iter().map(|p| p.month).collect();
    assert_eq!(months, (0..=60).step_by(6).collect::<Vec<_>>());
}

#[test]
fn snapshots_hold_their_figures() {
    assert_eq!(philippines_snapshot().get("Total ER+ Cases (2024)"), Some("14,200"));
    assert_eq!(quick_stats().metrics.len(), 3);
    assert_eq!(projections().metrics.len(), 4);
    assert!(projections().metrics.iter().all(|m| m.delta.is_some()));
}

#[test]
fn assistance_steps_and_tips() {
    let steps: Vec<u32> = assistance_process().iter().map(|s| s.step).collect();
    assert_eq!(steps, [1, 2, 3, 4, 5]);
    assert_eq!(INSURANCE_TIPS.len(), 5);
}
