//! Integration tests for the pre-export record checks.

use serde_json::{Value, json};

use jispen_model::Record;
use jispen_validate::{IssueCode, Severity, check_records};

fn test_zipcode(uid: &str) -> Value {
    json!({"uid": uid, "name": "Post office"})
}

fn test_facility(uid: u64, zipcode: Option<&str>) -> Value {
    json!({
        "id": uid,
        "uid": uid,
        "name": "Nemocnice Vinohrady",
        "companyId": "CZP01234",
        "address": {
            "city": "Praha",
            "street": "Šrobárova",
            "zipcode": zipcode.map(test_zipcode)
        },
        "territorialUnit": {"uid": "554782", "name": "Praha"}
    })
}

fn test_partner(id: u64, uid: Option<u64>, kind: &str, address: Option<Value>) -> Value {
    json!({
        "id": id,
        "uid": uid,
        "name": format!("Partner {id}"),
        "type": kind,
        "address": address,
        "territorialUnit": {"uid": "569810", "name": "Hradec Králové"},
        "templateId": 7
    })
}

fn test_partner_address(zipcode: Option<&str>) -> Value {
    json!({"city": "Hradec Králové", "zipcode": zipcode.map(test_zipcode)})
}

fn test_record(id: u64, facility: Value, partner: Option<Value>) -> Value {
    json!({
        "id": id,
        "date": "2024-03-05",
        "amount": 0.125,
        "template": {"id": 7, "title": "Infectious", "medicalCompany": facility},
        "waste": {"uid": "180101", "name": "Sharps", "category": "O"},
        "loadingCode": {"uid": "AN3", "name": "Handover", "requireWasteCompany": false},
        "wasteCompany": partner
    })
}

fn build(values: Vec<Value>) -> Vec<Record> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap())
        .collect()
}

#[test]
fn complete_records_pass() {
    let records = build(vec![
        test_record(1, test_facility(100, Some("10034")), None),
        test_record(
            2,
            test_facility(100, Some("10034")),
            Some(test_partner(
                5,
                Some(25596641),
                "COMPANY",
                Some(test_partner_address(Some("50002"))),
            )),
        ),
        test_record(
            3,
            test_facility(100, Some("10034")),
            Some(test_partner(42, None, "CITIZENS_OF_MUNICIPALITY", None)),
        ),
    ]);
    let report = check_records(&records);
    assert_eq!(report.records, 3);
    assert!(report.issues.is_empty(), "{:?}", report.issues);
    assert!(!report.has_errors());
}

#[test]
fn facility_without_zipcode_is_an_error_once() {
    let records = build(vec![
        test_record(1, test_facility(100, None), None),
        test_record(2, test_facility(100, None), None),
    ]);
    let report = check_records(&records);
    assert_eq!(report.codes(), vec![IssueCode::MissingZipcode]);
    assert_eq!(report.issues[0].record_id, Some(1));
    assert_eq!(report.issues[0].severity, Severity::Error);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn company_partner_needs_address_and_zipcode() {
    let records = build(vec![
        test_record(
            1,
            test_facility(100, Some("10034")),
            Some(test_partner(5, Some(1), "COMPANY", None)),
        ),
        test_record(
            2,
            test_facility(100, Some("10034")),
            Some(test_partner(
                6,
                Some(2),
                "COMPANY",
                Some(test_partner_address(None)),
            )),
        ),
    ]);
    let report = check_records(&records);
    assert_eq!(
        report.codes(),
        vec![
            IssueCode::MissingWasteCompanyAddress,
            IssueCode::MissingWasteCompanyZipcode,
        ]
    );
    assert!(report.has_errors());
}

#[test]
fn municipality_without_uid_is_an_error() {
    let records = build(vec![test_record(
        1,
        test_facility(100, Some("10034")),
        Some(test_partner(9, None, "MUNICIPALITY", None)),
    )]);
    let report = check_records(&records);
    assert_eq!(report.codes(), vec![IssueCode::MissingWasteCompanyUid]);
}

#[test]
fn citizens_partner_needs_no_address() {
    let records = build(vec![test_record(
        1,
        test_facility(100, Some("10034")),
        Some(test_partner(42, None, "CITIZENS_OF_MUNICIPALITY", None)),
    )]);
    assert!(check_records(&records).issues.is_empty());
}

#[test]
fn missing_required_partner_is_a_warning() {
    let mut record = test_record(1, test_facility(100, Some("10034")), None);
    record["loadingCode"]["requireWasteCompany"] = json!(true);
    let report = check_records(&build(vec![record]));
    assert_eq!(report.codes(), vec![IssueCode::WasteCompanyRequired]);
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
}

#[test]
fn multi_segment_category_is_reported_per_waste() {
    let mut first = test_record(1, test_facility(100, Some("10034")), None);
    first["waste"]["category"] = json!("a/b/c");
    let mut second = test_record(2, test_facility(100, Some("10034")), None);
    second["waste"]["category"] = json!("a/b/c");
    let mut single = test_record(3, test_facility(100, Some("10034")), None);
    single["waste"] = json!({"uid": "200101", "name": "Paper", "category": "20/2001"});

    let report = check_records(&build(vec![first, second, single]));
    assert_eq!(report.codes(), vec![IssueCode::MultiSegmentCategory]);
    assert_eq!(report.issues[0].record_id, Some(1));
}

#[test]
fn colliding_subject_ids_are_reported() {
    // Partner uid equal to the facility uid.
    let records = build(vec![test_record(
        1,
        test_facility(100, Some("10034")),
        Some(test_partner(
            5,
            Some(100),
            "COMPANY",
            Some(test_partner_address(Some("50002"))),
        )),
    )]);
    let report = check_records(&records);
    assert_eq!(report.codes(), vec![IssueCode::DuplicateSubjectId]);
    assert_eq!(
        report.issues[0].message,
        "subject id 100 appears 2 times in the export"
    );
}

#[test]
fn issues_serialize_with_stable_codes() {
    let records = build(vec![test_record(1, test_facility(100, None), None)]);
    let report = check_records(&records);
    let value = serde_json::to_value(&report.issues[0]).unwrap();
    assert_eq!(value["code"], "MISSING_ZIPCODE");
    assert_eq!(value["severity"], "error");
    assert_eq!(value["record_id"], 1);
}
