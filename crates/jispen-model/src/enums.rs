//! Discriminators carried by the record graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of partner a waste company represents in the registry.
///
/// The registry encodes each kind with a different subject shape, so this
/// value alone decides how a partner is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WasteCompanyType {
    /// Registered legal entity with a facility address.
    Company,
    /// Citizens of a municipality, identified only by territorial unit.
    CitizensOfMunicipality,
    /// A municipality acting as waste handler.
    Municipality,
}

impl WasteCompanyType {
    /// Returns the code used by the source system.
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCompanyType::Company => "COMPANY",
            WasteCompanyType::CitizensOfMunicipality => "CITIZENS_OF_MUNICIPALITY",
            WasteCompanyType::Municipality => "MUNICIPALITY",
        }
    }
}

impl fmt::Display for WasteCompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
