//! Column sort coordination: seed selection, classification and comparator choice.
//!
//! Each call is independent. The type tag is derived fresh from the rows it
//! is given, so re-invoking after the table data changes re-derives it.

use tablesort_model::{ColumnType, Locale, RowSnapshot, SortDirection};
use tracing::{debug, trace};

use crate::classify::classify_value;
use crate::comparator::{ColumnComparator, build_comparator};
use crate::redact::redact_value;

/// Inferred type of a column and the row whose cell decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnClassification {
    pub column_type: ColumnType,
    /// Index (within the rows passed in) of the first non-empty cell.
    pub seed_row: usize,
}

/// Trimmed text of a row's cell; missing cells read as empty.
pub(crate) fn cell_value<R: RowSnapshot + ?Sized>(row: &R, column: usize) -> &str {
    row.cell_text(column).unwrap_or_default().trim()
}

/// Classify a column from its first non-empty cell, scanning top to bottom.
///
/// Returns `None` when every cell in the column is empty.
pub fn classify_column<R: RowSnapshot>(rows: &[R], column: usize) -> Option<ColumnClassification> {
    for (index, row) in rows.iter().enumerate() {
        let value = cell_value(row, column);
        if value.is_empty() {
            trace!(column, row = index, "skipping empty cell");
            continue;
        }

        let column_type = classify_value(value);
        debug!(
            column,
            seed_row = index,
            sample = redact_value(value),
            column_type = %column_type,
            "inferred column type"
        );
        return Some(ColumnClassification {
            column_type,
            seed_row: index,
        });
    }

    debug!(column, rows = rows.len(), "column is empty; sort suppressed");
    None
}

/// Derive the comparator for sorting `column` in `direction`.
///
/// `rows` are the table body rows in document order, header excluded.
/// Returns `None` (do not sort) when the column has no non-empty cell.
pub fn compare_func<R: RowSnapshot>(
    rows: &[R],
    column: usize,
    direction: SortDirection,
    locale: &Locale,
) -> Option<ColumnComparator> {
    let classification = classify_column(rows, column)?;
    Some(build_comparator(
        classification.column_type,
        direction,
        locale,
    ))
}
