//! CLI argument definitions for the JISPEN exporter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jispen",
    version,
    about = "JISPEN - Export medical waste records to the ISEnvita registry",
    long_about = "Export recorded medical waste disposals as an ISEnvita/Import XML document.\n\n\
                  Reads fully resolved records from a JSON dataset, checks them for\n\
                  incomplete company data and writes the registry transfer file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow operator identities to appear in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the registry XML for a dataset.
    Export(ExportArgs),

    /// Report records the export would reject or the registry may misread.
    Check(CheckArgs),

    /// List catalogue entries referenced by a dataset.
    Catalogue(DatasetArgs),
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Path to the JSON dataset of resolved records.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

#[derive(Args)]
pub struct SelectionArgs {
    /// Export only this record (repeatable).
    #[arg(long = "record", value_name = "ID")]
    pub records: Vec<u64>,

    /// Export only records of this template (repeatable).
    #[arg(long = "template", value_name = "ID")]
    pub templates: Vec<u64>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Operator email written into the header sign-off.
    #[arg(long = "sign", value_name = "EMAIL")]
    pub sign: String,

    /// Output file or directory (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the completeness check before exporting.
    ///
    /// Incomplete records still abort the export, only later and with a
    /// less specific message.
    #[arg(long = "no-check")]
    pub no_check: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
