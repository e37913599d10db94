//! tablesort CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tablesort_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{print_inspect, print_sort, run_inspect, run_sort};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Sort(args) => run_sort(args).and_then(|report| print_sort(&report, args.output)),
        Command::Inspect(args) => run_inspect(args).map(|summaries| print_inspect(&summaries)),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit_level = cli.log_level.map(LevelFilter::from);
    let level_filter = explicit_level.unwrap_or_else(|| cli.verbosity.tracing_level_filter());
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!cli.verbosity.is_present() && explicit_level.is_none())
        .with_format(cli.log_format.into())
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}
