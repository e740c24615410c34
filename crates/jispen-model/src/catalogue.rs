//! Catalogue lookups shared by all templates.

use serde::{Deserialize, Serialize};

/// Waste catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waste {
    /// Catalogue code (e.g. "180103").
    pub uid: String,
    pub name: String,
    /// Category, optionally prefixed by a group ("20/2001").
    pub category: String,
}

impl Waste {
    /// Category as reported to the registry.
    ///
    /// Splits on the first `/` only and keeps the remainder; a category
    /// without `/` is reported unchanged.
    pub fn export_category(&self) -> &str {
        match self.category.split_once('/') {
            Some((_, rest)) => rest,
            None => &self.category,
        }
    }
}

/// Waste handling (loading) code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingCode {
    pub uid: String,
    pub name: String,
    /// Records using this code are expected to name a partner waste company.
    #[serde(default)]
    pub require_waste_company: bool,
}

/// Territorial unit (ZUJ).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorialUnit {
    pub uid: String,
    pub name: String,
}

/// Postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zipcode {
    pub uid: String,
    pub name: String,
}
