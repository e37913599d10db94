//! Column type inference from a single sample cell.
//!
//! Priority order (highest to lowest):
//! 1. Date: a valid calendar date or a full month name
//! 2. Numeric: a finite number once `$`, `,`, `%` and ordinal suffixes are
//!    stripped, or an ordinal word
//! 3. Alpha (default)

use tablesort_model::ColumnType;

use crate::normalization::{is_date, is_numeric};

/// Classify one non-empty sample cell.
///
/// The result is applied to the whole column for one sort pass; see
/// [`crate::classify_column`] for how the sample is chosen.
pub fn classify_value(value: &str) -> ColumnType {
    if is_date(value) {
        return ColumnType::Date;
    }
    if is_numeric(value) {
        return ColumnType::Numeric;
    }
    ColumnType::Alpha
}
