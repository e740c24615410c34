//! ISEnvita/Import XML export of JISPEN waste records.
//!
//! The export is a pure function of the resolved records, the operator
//! identity and the clock instant:
//!
//! - **Subjects**: medical facilities (deduplicated by registry uid) followed
//!   by partner waste companies (deduplicated by id), each encoded in one of
//!   three registry shapes
//! - **Waste entries**: one `Odpad` per record, in input order
//!
//! ```ignore
//! use jispen_export::{SystemClock, generate};
//!
//! let xml = generate(&records, "operator@example.com", &SystemClock)?;
//! ```

mod clock;
mod common;
mod dedupe;
mod document;
mod error;
mod subject;
mod waste;

pub use clock::{Clock, FixedClock, SystemClock};
pub use common::{HEADER_VERSION, IMPORT_NS, SOURCE_NAME, TRANSFER_VERSION};
pub use document::{ExportDocument, Header, build_document, generate, write_export};
pub use error::{ExportError, Result};
pub use subject::{
    CitizensSubject, CompanySubject, MunicipalitySubject, PostalAddress, Subject,
    SubjectIdentity, collect_subjects,
};
pub use waste::WasteEntry;
