//! erstats-datasets
//!
//! Every hand-authored table, snapshot and lookup the dashboard shows.
//! Pure data: each record set has a named row type and a registry entry so
//! the whole collection can be schema-checked in one pass.

pub mod datasets;
pub mod error;

use erstats_core::table::{SchemaViolation, Table};

use datasets::{affordability, hospitals, prevalence, treatment, trends};
use error::DatasetError;

/// Trait implemented by each tabular record set.
pub trait Dataset: Send + Sync {
    /// Stable identifier (e.g. "philippine_hospitals").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn title(&self) -> &str;

    /// The rows projected onto their column schema, in definition order.
    fn table(&self) -> Table;

    /// Check every row against the set's schema.
    fn validate(&self) -> Vec<SchemaViolation> {
        self.table().check_schema()
    }
}

/// Return all registered record sets.
pub fn all_datasets() -> Vec<Box<dyn Dataset>> {
    vec![
        Box::new(prevalence::RegionalDistribution),
        Box::new(prevalence::CountryComparison),
        Box::new(treatment::Treatments),
        Box::new(treatment::PfsCurves),
        Box::new(treatment::PatientProfiles),
        Box::new(hospitals::InternationalHospitals),
        Box::new(hospitals::PhilippineHospitals),
        Box::new(affordability::FreeHospitals),
        Box::new(affordability::LowCostHospitals),
        Box::new(affordability::PhilHealthCoverage),
        Box::new(affordability::GovernmentPrograms),
        Box::new(affordability::AssistanceProcess),
        Box::new(trends::YearlyTrends),
        Box::new(trends::ResearchPipeline),
    ]
}

/// Look up a record set by ID.
pub fn get_dataset(id: &str) -> Option<Box<dyn Dataset>> {
    all_datasets().into_iter().find(|d| d.id() == id)
}

pub fn require_dataset(id: &str) -> Result<Box<dyn Dataset>, DatasetError> {
    get_dataset(id).ok_or_else(|| DatasetError::UnknownDataset(id.to_string()))
}

/// Schema violations across every record set, snapshot and lookup mapping.
pub fn validate_all() -> Vec<SchemaViolation> {
    let mut violations: Vec<SchemaViolation> =
        all_datasets().iter().flat_map(|d| d.validate()).collect();

    for snapshot in [
        prevalence::philippines_snapshot(),
        prevalence::global_snapshot(),
        trends::projections(),
        prevalence::quick_stats(),
    ] {
        violations.extend(snapshot.check_labels());
    }

    violations.extend(hospitals::check_detail_keys());
    violations
}

/// Like [`validate_all`], but fails on the first batch of violations.
///
/// Returns the number of record sets checked.
pub fn ensure_valid() -> Result<usize, DatasetError> {
    let mut violations = validate_all();
    if violations.is_empty() {
        return Ok(all_datasets().len());
    }
    let count = violations.len();
    Err(DatasetError::Invalid {
        count,
        first: violations.remove(0),
    })
}
