//! Subjects referenced by records: medical facilities and partner companies.

use serde::{Deserialize, Serialize};

use crate::catalogue::{TerritorialUnit, Zipcode};
use crate::enums::WasteCompanyType;

/// Postal address of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub registry_number: Option<String>,
    #[serde(default)]
    pub building_number: Option<String>,
    #[serde(default)]
    pub zipcode: Option<Zipcode>,
}

/// Medical facility owning a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCompany {
    pub id: u64,
    /// Registry identifier; unique per facility within an export.
    pub uid: u64,
    pub name: String,
    /// Facility code.
    pub company_id: String,
    pub address: Address,
    pub territorial_unit: TerritorialUnit,
}

/// Partner that takes over waste from a medical facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteCompany {
    pub id: u64,
    #[serde(default)]
    pub uid: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(rename = "type")]
    pub company_type: WasteCompanyType,
    #[serde(default)]
    pub address: Option<Address>,
    pub territorial_unit: TerritorialUnit,
    pub template_id: u64,
}

impl WasteCompany {
    /// Identifier used for this partner in the export.
    ///
    /// Falls back to `template_id` followed by `id` (no separator) when the
    /// partner has no registry identifier.
    pub fn subject_id(&self) -> String {
        match self.uid {
            Some(uid) => uid.to_string(),
            None => format!("{}{}", self.template_id, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(uid: Option<u64>) -> WasteCompany {
        WasteCompany {
            id: 42,
            uid,
            name: None,
            company_id: None,
            company_type: WasteCompanyType::CitizensOfMunicipality,
            address: None,
            territorial_unit: TerritorialUnit {
                uid: "554782".to_string(),
                name: "Praha".to_string(),
            },
            template_id: 7,
        }
    }

    #[test]
    fn subject_id_prefers_uid() {
        assert_eq!(partner(Some(12345678)).subject_id(), "12345678");
    }

    #[test]
    fn subject_id_falls_back_to_template_and_id() {
        assert_eq!(partner(None).subject_id(), "742");
    }

    #[test]
    fn waste_company_reads_type_field() {
        let json = r#"{
            "id": 3,
            "uid": null,
            "type": "MUNICIPALITY",
            "territorialUnit": {"uid": "500011", "name": "Brno"},
            "templateId": 1
        }"#;
        let company: WasteCompany = serde_json::from_str(json).unwrap();
        assert_eq!(company.company_type, WasteCompanyType::Municipality);
        assert!(company.address.is_none());
        assert_eq!(company.subject_id(), "13");
    }
}
