//! Record selection for an export request.

use std::collections::BTreeSet;

use jispen_model::Record;

use crate::dataset::Dataset;
use crate::error::{IngestError, Result};

/// Which records an export covers.
///
/// An empty selection means every record in the dataset. When both filters
/// are set a record has to match both.
#[derive(Debug, Clone, Default)]
pub struct RecordSelection {
    pub record_ids: BTreeSet<u64>,
    pub template_ids: BTreeSet<u64>,
}

impl RecordSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.record_ids.extend(ids);
        self
    }

    pub fn with_templates(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.template_ids.extend(ids);
        self
    }

    pub fn is_all(&self) -> bool {
        self.record_ids.is_empty() && self.template_ids.is_empty()
    }

    fn matches(&self, record: &Record) -> bool {
        (self.record_ids.is_empty() || self.record_ids.contains(&record.id))
            && (self.template_ids.is_empty() || self.template_ids.contains(&record.template.id))
    }

    /// Take the selected records out of `dataset`, keeping dataset order.
    ///
    /// Fails when an explicitly requested record id is not in the dataset.
    pub fn apply(&self, dataset: Dataset) -> Result<Vec<Record>> {
        if self.is_all() {
            return Ok(dataset.records);
        }
        let missing: Vec<u64> = self
            .record_ids
            .iter()
            .copied()
            .filter(|id| !dataset.records.iter().any(|record| record.id == *id))
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::UnknownRecords { ids: missing });
        }
        Ok(dataset
            .records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect())
    }
}
