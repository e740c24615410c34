//! Dataset loading for the JISPEN export.
//!
//! Stands in for the persistence layer: reads fully resolved records from a
//! JSON document of the form `{"records": [...]}` and narrows them down to
//! the records an export request covers.

pub mod catalogue;
pub mod dataset;
pub mod error;
pub mod selection;

pub use catalogue::Catalogue;
pub use dataset::{Dataset, load_dataset, parse_dataset};
pub use error::{IngestError, Result};
pub use selection::RecordSelection;
