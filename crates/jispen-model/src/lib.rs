//! Resolved record graph for the JISPEN waste-registry export.
//!
//! Every type here is a read-only input: the persistence layer resolves a
//! [`Record`] together with its template, medical company, optional partner
//! waste company and catalogue entries before handing it to the exporter.

pub mod catalogue;
pub mod company;
pub mod date;
pub mod enums;
pub mod error;
pub mod record;

pub use catalogue::{LoadingCode, TerritorialUnit, Waste, Zipcode};
pub use company::{Address, MedicalCompany, WasteCompany};
pub use date::parse_calendar_date;
pub use enums::WasteCompanyType;
pub use error::{ModelError, Result};
pub use record::{Record, Template};
