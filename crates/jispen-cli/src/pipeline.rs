//! Export pipeline: load, select, check, write.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use jispen_export::{Clock, write_export};
use jispen_ingest::{RecordSelection, load_dataset};
use jispen_model::Record;
use jispen_validate::{CheckReport, check_records};

use crate::logging::redact_value;

/// File name used when the output path is a directory.
pub const DEFAULT_EXPORT_FILE: &str = "export.xml";

/// Everything needed to produce one export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub dataset: PathBuf,
    pub selection: RecordSelection,
    /// Operator email for the header sign-off.
    pub sign: String,
    /// Target file or directory; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Run the completeness check and refuse to export on errors.
    pub check: bool,
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub records: usize,
    /// Written file, when not exporting to stdout.
    pub output: Option<PathBuf>,
    pub report: Option<CheckReport>,
    /// The check found errors and nothing was written.
    pub blocked: bool,
}

/// Load a dataset and apply the record selection.
pub fn load_records(dataset: &Path, selection: &RecordSelection) -> Result<Vec<Record>> {
    let span = info_span!("load", dataset = %dataset.display());
    let _guard = span.enter();
    let loaded =
        load_dataset(dataset).with_context(|| format!("load dataset {}", dataset.display()))?;
    let total = loaded.len();
    let records = selection.apply(loaded).context("select records")?;
    info!(total, selected = records.len(), "records selected");
    Ok(records)
}

/// Resolve the export file path, appending the default name to directories.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_EXPORT_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Run one export request.
pub fn run_export(request: &ExportRequest, clock: &dyn Clock) -> Result<ExportOutcome> {
    let records = load_records(&request.dataset, &request.selection)?;

    let report = request.check.then(|| check_records(&records));
    if let Some(report) = report.as_ref().filter(|report| report.has_errors()) {
        warn!(
            errors = report.error_count(),
            "export blocked by incomplete records"
        );
        return Ok(ExportOutcome {
            records: records.len(),
            output: None,
            report: Some(report.clone()),
            blocked: true,
        });
    }

    let span = info_span!("write", sign = redact_value(&request.sign));
    let _guard = span.enter();
    let output = match &request.output {
        Some(path) => {
            let path = resolve_output_path(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_export(&records, &request.sign, clock, &mut writer).context("write export")?;
            writer
                .flush()
                .with_context(|| format!("flush {}", path.display()))?;
            info!(path = %path.display(), "export file written");
            Some(path)
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_export(&records, &request.sign, clock, &mut stdout).context("write export")?;
            writeln!(stdout).context("write export")?;
            None
        }
    };

    Ok(ExportOutcome {
        records: records.len(),
        output,
        report,
        blocked: false,
    })
}
