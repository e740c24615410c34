//! Completeness checks for JISPEN exports.

mod check;
mod report;

pub use check::check_records;
pub use report::{CheckIssue, CheckReport, IssueCode, Severity};
