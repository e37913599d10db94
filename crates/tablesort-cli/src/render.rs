//! Output rendering for sort and inspect results.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tablesort_model::{ColumnType, SortDirection};

use crate::report::{ColumnSummary, SortReport};

/// Render sorted rows as a terminal table, marking the sort column.
pub fn sort_table(report: &SortReport) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);

    let width = report
        .rows
        .iter()
        .map(Vec::len)
        .chain(report.headers.as_ref().map(Vec::len))
        .max()
        .unwrap_or(0);
    let header: Vec<Cell> = (0..width)
        .map(|index| {
            let label = report
                .headers
                .as_ref()
                .and_then(|headers| headers.get(index))
                .cloned()
                .unwrap_or_else(|| format!("#{index}"));
            if index == report.column_index && report.sorted {
                header_cell(&format!("{label} {}", direction_marker(report.direction)))
            } else {
                header_cell(&label)
            }
        })
        .collect();
    table.set_header(header);

    for row in &report.rows {
        let cells: Vec<Cell> = (0..width)
            .map(|index| match row.get(index) {
                Some(value) if index == report.column_index => {
                    Cell::new(value).add_attribute(Attribute::Bold)
                }
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect();
        table.add_row(cells);
    }
    if report.column_type == Some(ColumnType::Numeric)
        && let Some(column) = table.column_mut(report.column_index)
    {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Render per-column type inference results.
pub fn columns_table(summaries: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Seed row"),
        header_cell("Sample"),
    ]);
    for summary in summaries {
        table.add_row(vec![
            dim_cell(summary.index),
            Cell::new(&summary.name),
            type_cell(summary.column_type),
            summary
                .seed_row
                .map_or_else(|| dim_cell("-"), Cell::new),
            summary
                .sample
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Write sorted rows as CSV, header first when present.
pub fn write_csv<W: Write>(report: &SortReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    if let Some(headers) = &report.headers {
        csv_writer
            .write_record(headers)
            .context("write CSV header")?;
    }
    for row in &report.rows {
        csv_writer.write_record(row).context("write CSV row")?;
    }
    csv_writer.flush().context("flush CSV output")?;
    Ok(())
}

/// Write the full report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &SortReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).context("serialize report")?;
    writeln!(writer).context("write JSON output")?;
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn direction_marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn type_cell(column_type: Option<ColumnType>) -> Cell {
    match column_type {
        Some(ColumnType::Date) => Cell::new("date").fg(Color::Magenta),
        Some(ColumnType::Numeric) => Cell::new("numeric").fg(Color::Green),
        Some(ColumnType::Alpha) => Cell::new("alpha").fg(Color::Blue),
        None => dim_cell("empty"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
