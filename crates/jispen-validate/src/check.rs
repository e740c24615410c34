//! Record-set checks run ahead of an export.
//!
//! The exporter does not default missing links; it aborts. These checks find
//! such records up front and name them, together with softer problems the
//! registry is likely to complain about.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use jispen_model::{Record, WasteCompany, WasteCompanyType};

use crate::report::{CheckIssue, CheckReport, IssueCode};

/// Check `records` as they would be exported together.
pub fn check_records(records: &[Record]) -> CheckReport {
    let mut issues = Vec::new();
    let mut facilities = HashSet::new();
    let mut partners = HashSet::new();
    let mut categories = HashSet::new();
    let mut subject_ids: Vec<(String, u64)> = Vec::new();

    for record in records {
        let facility = record.medical_company();
        if facilities.insert(facility.uid) {
            subject_ids.push((facility.uid.to_string(), record.id));
            if facility.address.zipcode.is_none() {
                issues.push(CheckIssue::new(
                    IssueCode::MissingZipcode,
                    format!("medical company {} has an address without zip code", facility.uid),
                    Some(record.id),
                ));
            }
        }

        match &record.waste_company {
            Some(partner) => {
                if partners.insert(partner.id) {
                    subject_ids.push((partner.subject_id(), record.id));
                    check_partner(partner, record.id, &mut issues);
                }
            }
            None if record.loading_code.require_waste_company => {
                issues.push(CheckIssue::new(
                    IssueCode::WasteCompanyRequired,
                    format!(
                        "loading code {} requires a waste company",
                        record.loading_code.uid
                    ),
                    Some(record.id),
                ));
            }
            None => {}
        }

        let category = &record.waste.category;
        if category.matches('/').count() > 1 && categories.insert(record.waste.uid.as_str()) {
            issues.push(CheckIssue::new(
                IssueCode::MultiSegmentCategory,
                format!(
                    "waste {} category '{}' has more than one '/'",
                    record.waste.uid, category
                ),
                Some(record.id),
            ));
        }
    }

    issues.extend(duplicate_subject_ids(&subject_ids));

    for issue in &issues {
        debug!(code = %issue.code, record_id = ?issue.record_id, "{}", issue.message);
    }
    let report = CheckReport {
        records: records.len(),
        issues,
    };
    info!(
        records = report.records,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "record check finished"
    );
    report
}

fn check_partner(partner: &WasteCompany, record_id: u64, issues: &mut Vec<CheckIssue>) {
    let needs_uid = matches!(
        partner.company_type,
        WasteCompanyType::Company | WasteCompanyType::Municipality
    );
    if needs_uid && partner.uid.is_none() {
        issues.push(CheckIssue::new(
            IssueCode::MissingWasteCompanyUid,
            format!(
                "waste company {} of type {} has no registry uid",
                partner.id, partner.company_type
            ),
            Some(record_id),
        ));
    }
    if partner.company_type != WasteCompanyType::Company {
        return;
    }
    match &partner.address {
        None => issues.push(CheckIssue::new(
            IssueCode::MissingWasteCompanyAddress,
            format!("waste company {} has no address", partner.id),
            Some(record_id),
        )),
        Some(address) if address.zipcode.is_none() => issues.push(CheckIssue::new(
            IssueCode::MissingWasteCompanyZipcode,
            format!("waste company {} has an address without zip code", partner.id),
            Some(record_id),
        )),
        Some(_) => {}
    }
}

fn duplicate_subject_ids(subject_ids: &[(String, u64)]) -> Vec<CheckIssue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (id, _) in subject_ids {
        *counts.entry(id.as_str()).or_default() += 1;
    }
    let mut reported = HashSet::new();
    subject_ids
        .iter()
        .filter(|(id, _)| counts[id.as_str()] > 1 && reported.insert(id.as_str()))
        .map(|(id, record_id)| {
            CheckIssue::new(
                IssueCode::DuplicateSubjectId,
                format!(
                    "subject id {id} appears {} times in the export",
                    counts[id.as_str()]
                ),
                Some(*record_id),
            )
        })
        .collect()
}
