//! Serializable results of CLI commands.

use serde::Serialize;

use tablesort_core::classify_column;
use tablesort_model::{ColumnType, SortDirection};

use crate::table::CsvTable;

/// Outcome of sorting a table by one column.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub column: String,
    pub column_index: usize,
    pub direction: SortDirection,
    pub locale: String,
    /// Type the column was sorted as; `None` when the column was empty.
    pub column_type: Option<ColumnType>,
    pub sorted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Inferred type of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    /// `None` for columns with no non-empty cell.
    pub column_type: Option<ColumnType>,
    pub seed_row: Option<usize>,
    /// The cell that decided the type.
    pub sample: Option<String>,
}

/// Classify every column of a table.
pub fn summarize_columns(table: &CsvTable) -> Vec<ColumnSummary> {
    (0..table.column_count())
        .map(|index| {
            let classification = classify_column(&table.rows, index);
            let sample = classification.and_then(|found| {
                table.rows[found.seed_row]
                    .get(index)
                    .map(|cell| cell.trim().to_string())
            });
            ColumnSummary {
                index,
                name: table.column_name(index),
                column_type: classification.map(|found| found.column_type),
                seed_row: classification.map(|found| found.seed_row),
                sample,
            }
        })
        .collect()
}
