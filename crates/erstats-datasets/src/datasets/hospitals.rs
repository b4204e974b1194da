//! Treatment centers, international and domestic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use erstats_core::table::{Cell, Record, SchemaViolation, Table};
use serde::{Deserialize, Serialize};

use crate::Dataset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternationalHospital {
    pub hospital: String,
    pub country: String,
    pub specialty_score: u32,
    pub survival_rate: u32,
    pub publications: u32,
    pub annual_patients: u32,
}

impl Record for InternationalHospital {
    const COLUMNS: &'static [&'static str] = &[
        "Hospital",
        "Country",
        "ER+ Specialty Score",
        "5-Year Survival Rate",
        "Research Publications",
        "Patient Volume (Annual)",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.hospital),
            Cell::text(&self.country),
            self.specialty_score.into(),
            self.survival_rate.into(),
            self.publications.into(),
            self.annual_patients.into(),
        ]
    }
}

pub fn international_hospitals() -> &'static [InternationalHospital] {
    static ROWS: LazyLock<Vec<InternationalHospital>> = LazyLock::new(|| {
        [
            ("MD Anderson Cancer Center (USA)", "USA", 98, 94, 450, 2500),
            ("Memorial Sloan Kettering (USA)", "USA", 97, 93, 380, 2200),
            ("Mayo Clinic (USA)", "USA", 95, 92, 320, 1800),
            ("Singapore General Hospital", "Singapore", 92, 89, 180, 800),
            ("Cancer Institute, Tokyo", "Japan", 90, 88, 220, 950),
            ("Royal Marsden Hospital (UK)", "UK", 94, 91, 280, 1200),
        ]
        .into_iter()
        .map(
            |(hospital, country, specialty_score, survival_rate, publications, annual_patients)| {
                InternationalHospital {
                    hospital: hospital.to_string(),
                    country: country.to_string(),
                    specialty_score,
                    survival_rate,
                    publications,
                    annual_patients,
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct InternationalHospitals;

impl Dataset for InternationalHospitals {
    fn id(&self) -> &str {
        "international_hospitals"
    }

    fn title(&self) -> &str {
        "World's Best ER+ Treatment Centers"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), international_hospitals())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhilippineHospital {
    pub hospital: String,
    pub location: String,
    pub specialty_score: u32,
    pub survival_rate: u32,
    /// 1 to 10.
    pub technology_level: u32,
    pub monthly_cases: u32,
    pub waiting_weeks: u32,
}

impl Record for PhilippineHospital {
    const COLUMNS: &'static [&'static str] = &[
        "Hospital",
        "Location",
        "ER+ Specialty Score",
        "Survival Rate (%)",
        "Technology Level",
        "Monthly Cases",
        "Waiting Time (weeks)",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.hospital),
            Cell::text(&self.location),
            self.specialty_score.into(),
            self.survival_rate.into(),
            self.technology_level.into(),
            self.monthly_cases.into(),
            self.waiting_weeks.into(),
        ]
    }
}

pub fn philippine_hospitals() -> &'static [PhilippineHospital] {
    static ROWS: LazyLock<Vec<PhilippineHospital>> = LazyLock::new(|| {
        [
            ("Philippine General Hospital", "Manila", 85, 78, 8, 180, 8),
            ("St. Luke's Medical Center - BGC", "BGC", 92, 85, 10, 120, 2),
            ("St. Luke's Medical Center - QC", "Quezon City", 90, 83, 9, 110, 3),
            ("The Medical City", "Pasig", 88, 81, 9, 95, 3),
            ("Makati Medical Center", "Makati", 87, 80, 8, 85, 4),
            ("Asian Hospital", "Muntinlupa", 83, 76, 8, 70, 4),
            ("National Kidney Institute", "Quezon City", 80, 75, 7, 60, 6),
            ("Cardinal Santos Medical Center", "San Juan", 82, 77, 7, 55, 5),
            ("Chong Hua Hospital (Cebu)", "Cebu", 75, 72, 6, 45, 4),
            ("Southern Philippines Medical Center", "Davao", 72, 70, 6, 40, 3),
        ]
        .into_iter()
        .map(
            |(
                hospital,
                location,
                specialty_score,
                survival_rate,
                technology_level,
                monthly_cases,
                waiting_weeks,
            )| PhilippineHospital {
                hospital: hospital.to_string(),
                location: location.to_string(),
                specialty_score,
                survival_rate,
                technology_level,
                monthly_cases,
                waiting_weeks,
            },
        )
        .collect()
    });
    &ROWS
}

pub fn philippine_hospital(name: &str) -> Option<&'static PhilippineHospital> {
    philippine_hospitals().iter().find(|h| h.hospital == name)
}

pub struct PhilippineHospitals;

impl Dataset for PhilippineHospitals {
    fn id(&self) -> &str {
        "philippine_hospitals"
    }

    fn title(&self) -> &str {
        "Philippines Top ER+ Treatment Centers"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), philippine_hospitals())
    }
}

/// Extended information for the hospitals that have been documented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalDetail {
    pub services: Vec<String>,
    pub contact: String,
    pub website: String,
    pub special_programs: String,
}

/// Sparse mapping from domestic hospital name to its detail record.
pub fn hospital_details() -> &'static BTreeMap<String, HospitalDetail> {
    static DETAILS: LazyLock<BTreeMap<String, HospitalDetail>> = LazyLock::new(|| {
        let entries = [
            (
                "Philippine General Hospital",
                &[
                    "Free/Charity Care",
                    "Genetic Testing",
                    "Clinical Trials",
                    "Multidisciplinary Team",
                ],
                "(02) 8554-8400",
                "www.pgh.gov.ph",
                "PCSO Medical Assistance, Malasakit Center",
            ),
            (
                "St. Luke's Medical Center - BGC",
                &[
                    "Advanced Radiation Therapy",
                    "Precision Medicine",
                    "Immunotherapy",
                    "Robotic Surgery",
                ],
                "(02) 7789-7700",
                "www.stlukes.com.ph",
                "Cancer Institute, Research Center",
            ),
        ];

        entries
            .into_iter()
            .map(|(name, services, contact, website, special_programs)| {
                (
                    name.to_string(),
                    HospitalDetail {
                        services: services.iter().map(|s| s.to_string()).collect(),
                        contact: contact.to_string(),
                        website: website.to_string(),
                        special_programs: special_programs.to_string(),
                    },
                )
            })
            .collect()
    });
    &DETAILS
}

pub fn hospital_detail(name: &str) -> Option<&'static HospitalDetail> {
    hospital_details().get(name)
}

/// Detail keys must name hospitals that exist in the domestic set.
pub fn check_detail_keys() -> Vec<SchemaViolation> {
    hospital_details()
        .keys()
        .enumerate()
        .filter(|(_, name)| philippine_hospital(name).is_none())
        .map(|(idx, name)| SchemaViolation {
            table_id: "hospital_details".to_string(),
            row: idx,
            column: Some("Hospital".to_string()),
            message: format!("hospital_details: '{name}' is not a known Philippine hospital"),
        })
        .collect()
}
