//! Property tests for subject deduplication and ordering.

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use jispen_export::{FixedClock, build_document, generate};
use jispen_model::{
    Address, LoadingCode, MedicalCompany, Record, Template, TerritorialUnit, Waste, WasteCompany,
    WasteCompanyType, Zipcode,
};

fn test_unit() -> TerritorialUnit {
    TerritorialUnit {
        uid: "554782".to_string(),
        name: "Praha".to_string(),
    }
}

fn test_address() -> Address {
    Address {
        city: "Praha".to_string(),
        street: None,
        registry_number: None,
        building_number: None,
        zipcode: Some(Zipcode {
            uid: "10000".to_string(),
            name: "Praha 1".to_string(),
        }),
    }
}

fn test_record(id: u64, facility_uid: u64, partner_id: Option<u64>) -> Record {
    let medical_company = MedicalCompany {
        id: facility_uid,
        uid: 1_000 + facility_uid,
        name: format!("Facility {facility_uid}"),
        company_id: format!("CZP{facility_uid}"),
        address: test_address(),
        territorial_unit: test_unit(),
    };
    let waste_company = partner_id.map(|partner| WasteCompany {
        id: partner,
        uid: None,
        name: None,
        company_id: None,
        company_type: WasteCompanyType::CitizensOfMunicipality,
        address: None,
        territorial_unit: test_unit(),
        template_id: 9,
    });
    Record {
        id,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        amount: 1.0,
        template: Template {
            id: facility_uid,
            title: "Template".to_string(),
            medical_company,
            wastes: vec![],
            loading_codes: vec![],
            waste_companies: vec![],
        },
        waste: Waste {
            uid: "180101".to_string(),
            name: "Sharps".to_string(),
            category: "O".to_string(),
        },
        loading_code: LoadingCode {
            uid: "AN3".to_string(),
            name: "Handover".to_string(),
            require_waste_company: false,
        },
        waste_company,
    }
}

fn first_seen<T: Copy + Eq + std::hash::Hash>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    )
}

proptest! {
    #[test]
    fn subjects_follow_first_seen_order(
        rows in prop::collection::vec((0u64..4, prop::option::of(0u64..4)), 0..24)
    ) {
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(idx, (facility, partner))| test_record(idx as u64 + 1, *facility, *partner))
            .collect();
        let document = build_document(&records, "a@b.com", &clock()).unwrap();

        let mut expected: Vec<String> = first_seen(rows.iter().map(|(f, _)| *f))
            .into_iter()
            .map(|f| (1_000 + f).to_string())
            .collect();
        expected.extend(
            first_seen(rows.iter().filter_map(|(_, p)| *p))
                .into_iter()
                .map(|p| format!("9{p}")),
        );
        let actual: Vec<String> = document.subjects.iter().map(|s| s.id().to_string()).collect();
        prop_assert_eq!(actual, expected);

        let waste_ids: Vec<String> = document.wastes.iter().map(|w| w.id.clone()).collect();
        let record_ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        prop_assert_eq!(waste_ids, record_ids);
    }

    #[test]
    fn generate_is_repeatable(
        rows in prop::collection::vec((0u64..3, prop::option::of(0u64..3)), 0..10)
    ) {
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(idx, (facility, partner))| test_record(idx as u64 + 1, *facility, *partner))
            .collect();
        let first = generate(&records, "a@b.com", &clock()).unwrap();
        let second = generate(&records, "a@b.com", &clock()).unwrap();
        prop_assert_eq!(first, second);
    }
}
