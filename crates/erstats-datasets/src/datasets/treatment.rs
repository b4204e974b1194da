//! Endocrine and combination therapy outcomes.

use std::sync::LazyLock;

use erstats_core::table::{Cell, Record, Table};
use serde::{Deserialize, Serialize};

use crate::Dataset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentOutcome {
    pub treatment: String,
    pub response_rate: u32,
    /// Progression-free survival, months.
    pub pfs_months: u32,
    /// Overall survival, months.
    pub os_months: u32,
    /// 1 (mild) to 10 (severe).
    pub side_effects: u32,
    pub monthly_cost_usd: u32,
}

impl Record for TreatmentOutcome {
    const COLUMNS: &'static [&'static str] = &[
        "Treatment",
        "Response Rate (%)",
        "PFS (months)",
        "Overall Survival (months)",
        "Side Effects (1-10)",
        "Cost (USD/month)",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.treatment),
            self.response_rate.into(),
            self.pfs_months.into(),
            self.os_months.into(),
            self.side_effects.into(),
            self.monthly_cost_usd.into(),
        ]
    }
}

pub fn treatments() -> &'static [TreatmentOutcome] {
    static ROWS: LazyLock<Vec<TreatmentOutcome>> = LazyLock::new(|| {
        [
            ("Tamoxifen", 75, 24, 68, 4, 120),
            ("Aromatase Inhibitors", 82, 28, 72, 6, 800),
            ("CDK4/6 + Hormone", 88, 36, 84, 7, 12000),
            ("Fulvestrant", 71, 18, 62, 5, 2500),
            ("Chemotherapy + Hormone", 79, 22, 71, 8, 3500),
        ]
        .into_iter()
        .map(
            |(treatment, response_rate, pfs_months, os_months, side_effects, monthly_cost_usd)| {
                TreatmentOutcome {
                    treatment: treatment.to_string(),
                    response_rate,
                    pfs_months,
                    os_months,
                    side_effects,
                    monthly_cost_usd,
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct Treatments;

impl Dataset for Treatments {
    fn id(&self) -> &str {
        "treatments"
    }

    fn title(&self) -> &str {
        "Treatment Effectiveness"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), treatments())
    }
}

/// Percent of patients still progression-free at a given month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfsPoint {
    pub month: u32,
    pub tamoxifen: u32,
    pub aromatase_inhibitors: u32,
    pub cdk46_hormone: u32,
    pub chemo_hormone: u32,
}

impl PfsPoint {
    /// Curve names in column order, paired with their values at this month.
    pub fn curves(&self) -> [(&'static str, u32); 4] {
        [
            ("Tamoxifen", self.tamoxifen),
            ("Aromatase Inhibitors", self.aromatase_inhibitors),
            ("CDK4/6 + Hormone", self.cdk46_hormone),
            ("Chemotherapy + Hormone", self.chemo_hormone),
        ]
    }
}

impl Record for PfsPoint {
    const COLUMNS: &'static [&'static str] = &[
        "Month",
        "Tamoxifen",
        "Aromatase Inhibitors",
        "CDK4/6 + Hormone",
        "Chemotherapy + Hormone",
    ];

    fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![Cell::from(self.month)];
        cells.extend(self.curves().iter().map(|(_, pct)| Cell::from(*pct)));
        cells
    }
}

/// Months 0 to 60 in steps of 6.
pub fn pfs_curves() -> &'static [PfsPoint] {
    static ROWS: LazyLock<Vec<PfsPoint>> = LazyLock::new(|| {
        let tamoxifen = [100, 92, 85, 78, 70, 62, 54, 45, 38, 30, 22];
        let aromatase = [100, 94, 88, 82, 75, 68, 60, 52, 44, 35, 26];
        let cdk46 = [100, 96, 92, 88, 83, 78, 72, 65, 58, 50, 42];
        let chemo = [100, 89, 79, 70, 62, 54, 46, 38, 30, 22, 15];

        (0..11)
            .map(|i| PfsPoint {
                month: i as u32 * 6,
                tamoxifen: tamoxifen[i],
                aromatase_inhibitors: aromatase[i],
                cdk46_hormone: cdk46[i],
                chemo_hormone: chemo[i],
            })
            .collect()
    });
    &ROWS
}

pub struct PfsCurves;

impl Dataset for PfsCurves {
    fn id(&self) -> &str {
        "pfs_curves"
    }

    fn title(&self) -> &str {
        "Progression-Free Survival Curves"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), pfs_curves())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub profile: String,
    pub first_line: String,
    pub success_rate: String,
    pub duration_years: String,
}

impl Record for PatientProfile {
    const COLUMNS: &'static [&'static str] =
        &["Patient Profile", "First Line", "Success Rate", "Duration (years)"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.profile),
            Cell::text(&self.first_line),
            Cell::text(&self.success_rate),
            Cell::text(&self.duration_years),
        ]
    }
}

pub fn patient_profiles() -> &'static [PatientProfile] {
    static ROWS: LazyLock<Vec<PatientProfile>> = LazyLock::new(|| {
        [
            ("Pre-menopausal, Low Risk", "Tamoxifen", "85%", "5-10"),
            ("Post-menopausal, Low Risk", "Aromatase Inhibitor", "88%", "5-10"),
            ("High Risk, Node+", "CDK4/6 + AI", "92%", "2-3"),
            ("Metastatic", "CDK4/6 + Fulvestrant", "75%", "Until progression"),
            ("Elderly (>70)", "Tamoxifen", "80%", "5"),
        ]
        .into_iter()
        .map(
            |(profile, first_line, success_rate, duration_years)| PatientProfile {
                profile: profile.to_string(),
                first_line: first_line.to_string(),
                success_rate: success_rate.to_string(),
                duration_years: duration_years.to_string(),
            },
        )
        .collect()
    });
    &ROWS
}

pub struct PatientProfiles;

impl Dataset for PatientProfiles {
    fn id(&self) -> &str {
        "patient_profiles"
    }

    fn title(&self) -> &str {
        "Personalized Treatment Recommendations"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), patient_profiles())
    }
}
