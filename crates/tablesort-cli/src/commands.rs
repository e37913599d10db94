//! Command implementations.

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};

use tablesort_cli::render::{columns_table, sort_table, write_csv, write_json};
use tablesort_cli::report::{ColumnSummary, SortReport, summarize_columns};
use tablesort_cli::table::CsvTable;
use tablesort_core::sort_column;
use tablesort_model::{Locale, SortOptions};

use crate::cli::{InspectArgs, OutputFormatArg, SortArgs};

pub fn run_sort(args: &SortArgs) -> Result<SortReport> {
    let mut table = CsvTable::load(&args.input, !args.no_header)
        .with_context(|| format!("load {}", args.input.display()))?;
    let column = table.resolve_column(&args.column)?;
    let locale = match &args.lang {
        Some(tag) => Locale::parse(tag)?,
        None => Locale::default(),
    };
    let options = SortOptions::new(args.direction.into()).with_locale(locale);

    let column_type = sort_column(&mut table.rows, column, &options);
    let column_name = table.column_name(column);
    match column_type {
        Some(column_type) => info!(
            column = %column_name,
            column_type = %column_type,
            direction = %options.direction,
            rows = table.rows.len(),
            "sorted table"
        ),
        None => warn!(column = %column_name, "column has no data; rows left in original order"),
    }

    Ok(SortReport {
        column: column_name,
        column_index: column,
        direction: options.direction,
        locale: options.locale.to_string(),
        column_type,
        sorted: column_type.is_some(),
        headers: table.headers,
        rows: table.rows,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<ColumnSummary>> {
    let table = CsvTable::load(&args.input, !args.no_header)
        .with_context(|| format!("load {}", args.input.display()))?;
    let summaries = summarize_columns(&table);
    info!(columns = summaries.len(), rows = table.rows.len(), "inspected table");
    Ok(summaries)
}

pub fn print_sort(report: &SortReport, output: OutputFormatArg) -> Result<()> {
    match output {
        OutputFormatArg::Table => {
            println!("{}", sort_table(report));
            Ok(())
        }
        OutputFormatArg::Csv => write_csv(report, io::stdout().lock()),
        OutputFormatArg::Json => write_json(report, io::stdout().lock()),
    }
}

pub fn print_inspect(summaries: &[ColumnSummary]) {
    println!("{}", columns_table(summaries));
}
