//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or selecting records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file not found.
    #[error("dataset not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or does not match the record graph.
    #[error("failed to parse dataset {origin}: {source}")]
    JsonParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record carries a negative quantity.
    #[error("record {record_id} has negative amount {amount}")]
    NegativeAmount { record_id: u64, amount: f64 },

    /// Explicitly requested records are not in the dataset.
    #[error("unknown record ids: {}", format_ids(.ids))]
    UnknownRecords { ids: Vec<u64> },
}

pub type Result<T> = std::result::Result<T, IngestError>;

fn format_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
