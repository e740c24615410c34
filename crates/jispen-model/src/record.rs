//! Templates and the disposal records reported against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalogue::{LoadingCode, Waste};
use crate::company::{MedicalCompany, WasteCompany};
use crate::date::serde_calendar_date;

/// Medical facility profile with what it is allowed to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: u64,
    pub title: String,
    pub medical_company: MedicalCompany,
    #[serde(default)]
    pub wastes: Vec<Waste>,
    #[serde(default)]
    pub loading_codes: Vec<LoadingCode>,
    #[serde(default)]
    pub waste_companies: Vec<WasteCompany>,
}

/// One waste disposal event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    #[serde(with = "serde_calendar_date")]
    pub date: NaiveDate,
    /// Quantity in tonnes.
    pub amount: f64,
    pub template: Template,
    pub waste: Waste,
    pub loading_code: LoadingCode,
    #[serde(default)]
    pub waste_company: Option<WasteCompany>,
}

impl Record {
    /// Facility the record is reported for.
    pub fn medical_company(&self) -> &MedicalCompany {
        &self.template.medical_company
    }
}
