use erstats_core::table::SchemaViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("{count} schema violation(s), first: {first}")]
    Invalid {
        count: usize,
        first: SchemaViolation,
    },
}
