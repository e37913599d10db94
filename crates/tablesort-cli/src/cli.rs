//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use tablesort_cli::logging::LogFormat;
use tablesort_model::SortDirection;

#[derive(Parser)]
#[command(
    name = "tablesort",
    version,
    about = "Sort table columns the way the data table component does",
    long_about = "Sort CSV tables by one column using data table sort rules.\n\n\
                  The first non-empty cell decides whether a column sorts as dates,\n\
                  numbers or text. Entirely empty columns are left unsorted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort a CSV table by one column and print the result.
    Sort(SortArgs),

    /// Report the inferred type of every column.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct SortArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column to sort by: header name or zero-based index.
    #[arg(long = "column", short = 'c', value_name = "COLUMN")]
    pub column: String,

    /// Sort direction.
    #[arg(long = "direction", short = 'd', value_enum, default_value = "ascending")]
    pub direction: DirectionArg,

    /// Locale tag for text collation (default: en-US).
    #[arg(long = "lang", value_name = "TAG")]
    pub lang: Option<String>,

    /// Output format.
    #[arg(long = "output", short = 'o', value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    /// Treat the first row as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Treat the first row as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl From<DirectionArg> for SortDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Ascending => SortDirection::Ascending,
            DirectionArg::Descending => SortDirection::Descending,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
