//! Free, low-cost, insured and government-assisted care.

use std::sync::LazyLock;

use erstats_core::table::{Cell, Record, Table};
use serde::{Deserialize, Serialize};

use crate::Dataset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeHospital {
    pub hospital: String,
    pub location: String,
    pub free_services: String,
    pub eligibility: String,
    pub waiting_time: String,
    pub quality_score: u32,
}

impl Record for FreeHospital {
    const COLUMNS: &'static [&'static str] = &[
        "Hospital",
        "Location",
        "Free Services",
        "Eligibility",
        "Waiting Time",
        "Quality Score",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.hospital),
            Cell::text(&self.location),
            Cell::text(&self.free_services),
            Cell::text(&self.eligibility),
            Cell::text(&self.waiting_time),
            self.quality_score.into(),
        ]
    }
}

pub fn free_hospitals() -> &'static [FreeHospital] {
    static ROWS: LazyLock<Vec<FreeHospital>> = LazyLock::new(|| {
        [
            (
                "Philippine General Hospital",
                "Manila",
                "Full treatment, surgery, chemo",
                "Indigent patients, PCSO referral",
                "6-8 weeks",
                85,
            ),
            (
                "Jose Reyes Memorial Medical Center",
                "Manila",
                "Basic treatment, consultation",
                "Charity care application",
                "4-6 weeks",
                70,
            ),
            (
                "Lung Center of the Philippines",
                "Quezon City",
                "Specialized cancer care",
                "DOH referral system",
                "3-4 weeks",
                78,
            ),
            (
                "National Kidney Institute",
                "Quezon City",
                "Oncology services",
                "Government employees, charity",
                "4-5 weeks",
                75,
            ),
            (
                "East Avenue Medical Center",
                "Quezon City",
                "Emergency and charity care",
                "Emergency cases, charity",
                "2-3 weeks",
                72,
            ),
            (
                "Dr. Jose Fabella Memorial Hospital",
                "Manila",
                "Women's health services",
                "Women, charity cases",
                "2-4 weeks",
                68,
            ),
            (
                "Rizal Medical Center",
                "Pasig",
                "General oncology",
                "Marikina residents, charity",
                "3-5 weeks",
                70,
            ),
            (
                "Quirino Memorial Medical Center",
                "Quezon City",
                "Basic cancer treatment",
                "QC residents, charity",
                "4-6 weeks",
                65,
            ),
        ]
        .into_iter()
        .map(
            |(hospital, location, free_services, eligibility, waiting_time, quality_score)| {
                FreeHospital {
                    hospital: hospital.to_string(),
                    location: location.to_string(),
                    free_services: free_services.to_string(),
                    eligibility: eligibility.to_string(),
                    waiting_time: waiting_time.to_string(),
                    quality_score,
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct FreeHospitals;

impl Dataset for FreeHospitals {
    fn id(&self) -> &str {
        "free_hospitals"
    }

    fn title(&self) -> &str {
        "Free and Charity Care Options"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), free_hospitals())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowCostHospital {
    pub hospital: String,
    pub location: String,
    pub average_cost_php: u32,
    pub package_includes: String,
    pub payment_terms: String,
    pub quality_score: u32,
}

impl Record for LowCostHospital {
    const COLUMNS: &'static [&'static str] = &[
        "Hospital",
        "Location",
        "Average Cost (PHP)",
        "Package Includes",
        "Payment Terms",
        "Quality Score",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.hospital),
            Cell::text(&self.location),
            self.average_cost_php.into(),
            Cell::text(&self.package_includes),
            Cell::text(&self.payment_terms),
            self.quality_score.into(),
        ]
    }
}

pub fn low_cost_hospitals() -> &'static [LowCostHospital] {
    static ROWS: LazyLock<Vec<LowCostHospital>> = LazyLock::new(|| {
        [
            (
                "FEU-Dr. Nicanor Reyes Medical Foundation",
                "Manila",
                250000,
                "Consultation, basic chemo",
                "Installment available",
                78,
            ),
            (
                "University of the East Ramon Magsaysay",
                "Quezon City",
                300000,
                "Surgery, hormone therapy",
                "Monthly payment plans",
                75,
            ),
            (
                "De La Salle University Medical Center",
                "Cavite",
                350000,
                "Comprehensive care",
                "50% downpayment",
                82,
            ),
            (
                "Adventist Medical Center",
                "Pasay",
                280000,
                "Basic treatment package",
                "Flexible terms",
                70,
            ),
            (
                "Medical Center Manila",
                "Manila",
                320000,
                "Standard oncology care",
                "Insurance + cash",
                72,
            ),
            (
                "Capitol Medical Center",
                "Quezon City",
                290000,
                "Limited treatment options",
                "Advance payment",
                68,
            ),
        ]
        .into_iter()
        .map(
            |(hospital, location, average_cost_php, package_includes, payment_terms, quality_score)| {
                LowCostHospital {
                    hospital: hospital.to_string(),
                    location: location.to_string(),
                    average_cost_php,
                    package_includes: package_includes.to_string(),
                    payment_terms: payment_terms.to_string(),
                    quality_score,
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct LowCostHospitals;

impl Dataset for LowCostHospitals {
    fn id(&self) -> &str {
        "low_cost_hospitals"
    }

    fn title(&self) -> &str {
        "Low-Cost Private Options"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), low_cost_hospitals())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoveragePackage {
    pub package: String,
    pub philhealth_php: u32,
    pub total_cost_php: u32,
    pub out_of_pocket_php: u32,
    pub coverage_percentage: String,
}

impl Record for CoveragePackage {
    const COLUMNS: &'static [&'static str] = &[
        "Treatment Package",
        "PhilHealth Coverage (PHP)",
        "Estimated Total Cost (PHP)",
        "Out-of-Pocket (PHP)",
        "Coverage Percentage",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.package),
            self.philhealth_php.into(),
            self.total_cost_php.into(),
            self.out_of_pocket_php.into(),
            Cell::text(&self.coverage_percentage),
        ]
    }
}

pub fn philhealth_coverage() -> &'static [CoveragePackage] {
    static ROWS: LazyLock<Vec<CoveragePackage>> = LazyLock::new(|| {
        [
            ("ER+ Breast Cancer - Early Stage", 200000, 400000, 200000, "50%"),
            ("ER+ Breast Cancer - Advanced", 350000, 800000, 450000, "44%"),
            ("Hormone Therapy (Tamoxifen)", 15000, 45000, 30000, "33%"),
            ("Chemotherapy Package", 120000, 300000, 180000, "40%"),
            ("Radiation Therapy", 80000, 200000, 120000, "40%"),
            ("Genetic Testing (BRCA)", 25000, 50000, 25000, "50%"),
        ]
        .into_iter()
        .map(
            |(package, philhealth_php, total_cost_php, out_of_pocket_php, coverage_percentage)| {
                CoveragePackage {
                    package: package.to_string(),
                    philhealth_php,
                    total_cost_php,
                    out_of_pocket_php,
                    coverage_percentage: coverage_percentage.to_string(),
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct PhilHealthCoverage;

impl Dataset for PhilHealthCoverage {
    fn id(&self) -> &str {
        "philhealth_coverage"
    }

    fn title(&self) -> &str {
        "PhilHealth and Insurance Coverage"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), philhealth_coverage())
    }
}

/// Static advice shown under the coverage table.
pub const INSURANCE_TIPS: &[&str] = &[
    "Upgrade to higher PhilHealth category before diagnosis",
    "Consider supplemental health insurance",
    "Join HMO with cancer coverage",
    "Utilize PCSO Medical Assistance",
    "Apply for Malasakit Center benefits",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistanceProgram {
    pub program: String,
    pub coverage_amount: String,
    pub eligibility: String,
    pub processing_time: String,
    pub requirements: String,
}

impl Record for AssistanceProgram {
    const COLUMNS: &'static [&'static str] = &[
        "Program",
        "Coverage Amount (PHP)",
        "Eligibility",
        "Processing Time",
        "Requirements",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.program),
            Cell::text(&self.coverage_amount),
            Cell::text(&self.eligibility),
            Cell::text(&self.processing_time),
            Cell::text(&self.requirements),
        ]
    }
}

pub fn government_programs() -> &'static [AssistanceProgram] {
    static ROWS: LazyLock<Vec<AssistanceProgram>> = LazyLock::new(|| {
        [
            (
                "PCSO Individual Medical Assistance",
                "Up to 1M",
                "All income levels",
                "2-4 weeks",
                "Medical certificate, financial docs",
            ),
            (
                "Malasakit Centers",
                "Variable",
                "Public hospital patients",
                "1-2 days",
                "Hospital admission",
            ),
            (
                "DOH Medical Assistance",
                "Up to 200K",
                "Indigent patients",
                "1-3 weeks",
                "Indigency certificate",
            ),
            (
                "DSWD Medical Assistance",
                "Up to 50K",
                "DSWD beneficiaries",
                "1-2 weeks",
                "DSWD assessment",
            ),
            (
                "Local Government Medical Aid",
                "Up to 100K",
                "Local residents",
                "3-7 days",
                "Barangay certificate",
            ),
            (
                "4Ps Health Benefits",
                "Full PhilHealth",
                "4Ps members",
                "Immediate",
                "4Ps membership",
            ),
        ]
        .into_iter()
        .map(
            |(program, coverage_amount, eligibility, processing_time, requirements)| {
                AssistanceProgram {
                    program: program.to_string(),
                    coverage_amount: coverage_amount.to_string(),
                    eligibility: eligibility.to_string(),
                    processing_time: processing_time.to_string(),
                    requirements: requirements.to_string(),
                }
            },
        )
        .collect()
    });
    &ROWS
}

pub struct GovernmentPrograms;

impl Dataset for GovernmentPrograms {
    fn id(&self) -> &str {
        "government_programs"
    }

    fn title(&self) -> &str {
        "Government Assistance Programs"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), government_programs())
    }
}

/// One step of the assistance application, with the cumulative day count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u32,
    pub process: String,
    pub timeline_days: u32,
}

impl Record for ProcessStep {
    const COLUMNS: &'static [&'static str] = &["Step", "Process", "Timeline (days)"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.step.into(),
            Cell::text(&self.process),
            self.timeline_days.into(),
        ]
    }
}

pub fn assistance_process() -> &'static [ProcessStep] {
    static ROWS: LazyLock<Vec<ProcessStep>> = LazyLock::new(|| {
        [
            "Get medical certificate",
            "Gather financial documents",
            "Apply to programs",
            "Follow up applications",
            "Receive assistance",
        ]
        .into_iter()
        .zip([1, 3, 7, 14, 21])
        .zip(1..)
        .map(|((process, timeline_days), step)| ProcessStep {
            step,
            process: process.to_string(),
            timeline_days,
        })
        .collect()
    });
    &ROWS
}

pub struct AssistanceProcess;

impl Dataset for AssistanceProcess {
    fn id(&self) -> &str {
        "assistance_process"
    }

    fn title(&self) -> &str {
        "Assistance Application Process"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), assistance_process())
    }
}
