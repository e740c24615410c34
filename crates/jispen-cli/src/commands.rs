use anyhow::{Context, Result};

use jispen_export::SystemClock;
use jispen_ingest::{RecordSelection, load_dataset};
use jispen_validate::{CheckReport, check_records};

use jispen_cli::pipeline::{ExportOutcome, ExportRequest, load_records, run_export};

use crate::cli::{CheckArgs, DatasetArgs, ExportArgs, SelectionArgs};
use crate::summary::print_catalogue;

fn selection(args: &SelectionArgs) -> RecordSelection {
    RecordSelection::all()
        .with_records(args.records.iter().copied())
        .with_templates(args.templates.iter().copied())
}

pub fn run_export_command(args: &ExportArgs) -> Result<ExportOutcome> {
    let request = ExportRequest {
        dataset: args.dataset.dataset.clone(),
        selection: selection(&args.selection),
        sign: args.sign.clone(),
        output: args.output.clone(),
        check: !args.no_check,
    };
    run_export(&request, &SystemClock)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let records = load_records(&args.dataset.dataset, &selection(&args.selection))?;
    Ok(check_records(&records))
}

pub fn run_catalogue(args: &DatasetArgs) -> Result<()> {
    let dataset = load_dataset(&args.dataset)
        .with_context(|| format!("load dataset {}", args.dataset.display()))?;
    print_catalogue(&dataset.catalogue());
    Ok(())
}
