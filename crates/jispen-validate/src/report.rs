use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The export would abort on this record.
    Error,
    /// The export succeeds but the registry may reject or misread it.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    MissingZipcode,
    MissingWasteCompanyAddress,
    MissingWasteCompanyZipcode,
    MissingWasteCompanyUid,
    WasteCompanyRequired,
    DuplicateSubjectId,
    MultiSegmentCategory,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingZipcode => "MISSING_ZIPCODE",
            IssueCode::MissingWasteCompanyAddress => "MISSING_WASTE_COMPANY_ADDRESS",
            IssueCode::MissingWasteCompanyZipcode => "MISSING_WASTE_COMPANY_ZIPCODE",
            IssueCode::MissingWasteCompanyUid => "MISSING_WASTE_COMPANY_UID",
            IssueCode::WasteCompanyRequired => "WASTE_COMPANY_REQUIRED",
            IssueCode::DuplicateSubjectId => "DUPLICATE_SUBJECT_ID",
            IssueCode::MultiSegmentCategory => "MULTI_SEGMENT_CATEGORY",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::MissingZipcode
            | IssueCode::MissingWasteCompanyAddress
            | IssueCode::MissingWasteCompanyZipcode
            | IssueCode::MissingWasteCompanyUid => Severity::Error,
            IssueCode::WasteCompanyRequired
            | IssueCode::DuplicateSubjectId
            | IssueCode::MultiSegmentCategory => Severity::Warning,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in the record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIssue {
    pub code: IssueCode,
    pub message: String,
    pub severity: Severity,
    /// First record exhibiting the issue, if it is tied to one.
    pub record_id: Option<u64>,
}

impl CheckIssue {
    pub fn new(code: IssueCode, message: impl Into<String>, record_id: Option<u64>) -> Self {
        Self {
            code,
            message: message.into(),
            severity: code.severity(),
            record_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub records: usize,
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn codes(&self) -> Vec<IssueCode> {
        self.issues.iter().map(|issue| issue.code).collect()
    }
}
