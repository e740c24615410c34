//! Error types for the registry export.

use thiserror::Error;

/// Errors that abort an export.
///
/// There is no partial output: the first failure ends the whole export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A link required by the subject shape is absent from the record graph.
    #[error("{entity} {id} is missing {field}")]
    MissingField {
        entity: &'static str,
        id: u64,
        field: &'static str,
    },

    /// XML event could not be written.
    #[error("xml write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Underlying writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized document was not valid UTF-8.
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
