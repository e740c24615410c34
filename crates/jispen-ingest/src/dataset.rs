//! Dataset files: resolved records exported from the persistence layer.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use jispen_model::Record;

use crate::error::{IngestError, Result};

/// A set of fully resolved records, in persistence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_amounts(&self) -> Result<()> {
        match self.records.iter().find(|record| record.amount < 0.0) {
            Some(record) => Err(IngestError::NegativeAmount {
                record_id: record.id,
                amount: record.amount,
            }),
            None => Ok(()),
        }
    }
}

/// Parse a dataset from JSON text. `origin` names the source in errors.
pub fn parse_dataset(text: &str, origin: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
        origin: origin.to_string(),
        source,
    })?;
    dataset.check_amounts()?;
    Ok(dataset)
}

/// Load a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text, &path.display().to_string())?;
    if dataset.is_empty() {
        warn!(path = %path.display(), "dataset contains no records");
    } else {
        debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
    }
    Ok(dataset)
}
