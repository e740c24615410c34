//! Catalogue entries referenced by a dataset.

use std::collections::HashSet;

use jispen_model::{LoadingCode, Record, TerritorialUnit, Waste, Zipcode};

use crate::dataset::Dataset;

/// Distinct catalogue lookups, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub wastes: Vec<Waste>,
    pub loading_codes: Vec<LoadingCode>,
    pub territorial_units: Vec<TerritorialUnit>,
    pub zipcodes: Vec<Zipcode>,
}

#[derive(Default)]
struct Seen {
    wastes: HashSet<String>,
    loading_codes: HashSet<String>,
    territorial_units: HashSet<String>,
    zipcodes: HashSet<String>,
}

impl Catalogue {
    fn add_waste(&mut self, seen: &mut Seen, waste: &Waste) {
        if seen.wastes.insert(waste.uid.clone()) {
            self.wastes.push(waste.clone());
        }
    }

    fn add_loading_code(&mut self, seen: &mut Seen, code: &LoadingCode) {
        if seen.loading_codes.insert(code.uid.clone()) {
            self.loading_codes.push(code.clone());
        }
    }

    fn add_territorial_unit(&mut self, seen: &mut Seen, unit: &TerritorialUnit) {
        if seen.territorial_units.insert(unit.uid.clone()) {
            self.territorial_units.push(unit.clone());
        }
    }

    fn add_zipcode(&mut self, seen: &mut Seen, zipcode: Option<&Zipcode>) {
        if let Some(zipcode) = zipcode
            && seen.zipcodes.insert(zipcode.uid.clone())
        {
            self.zipcodes.push(zipcode.clone());
        }
    }

    fn add_record(&mut self, seen: &mut Seen, record: &Record) {
        self.add_waste(seen, &record.waste);
        self.add_loading_code(seen, &record.loading_code);
        for waste in &record.template.wastes {
            self.add_waste(seen, waste);
        }
        for code in &record.template.loading_codes {
            self.add_loading_code(seen, code);
        }
        let facility = record.medical_company();
        self.add_territorial_unit(seen, &facility.territorial_unit);
        self.add_zipcode(seen, facility.address.zipcode.as_ref());
        let partners = record
            .waste_company
            .iter()
            .chain(record.template.waste_companies.iter());
        for partner in partners {
            self.add_territorial_unit(seen, &partner.territorial_unit);
            self.add_zipcode(
                seen,
                partner.address.as_ref().and_then(|a| a.zipcode.as_ref()),
            );
        }
    }
}

impl Dataset {
    /// Collect the catalogue entries the records refer to.
    pub fn catalogue(&self) -> Catalogue {
        let mut catalogue = Catalogue::default();
        let mut seen = Seen::default();
        for record in &self.records {
            catalogue.add_record(&mut seen, record);
        }
        catalogue
    }
}
