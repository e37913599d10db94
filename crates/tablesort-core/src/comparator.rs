//! Comparator construction for one column and one sort pass.

use std::cmp::Ordering;

use tablesort_model::{ColumnType, Locale, SortDirection};

use crate::collation::Collator;
use crate::normalization::{date_value, numeric_value};

/// Comparator over raw cell strings for a column of a known type.
///
/// [`compare`](Self::compare) returns the raw signed signal (negative means
/// `a` sorts before `b`). Numeric and date signals are `a - b` ascending and
/// `b - a` descending, so malformed cells that resolve to `NaN` produce a
/// `NaN` signal. [`ordering`](Self::ordering) folds `NaN` into `Equal`.
///
/// Only meaningful within the value domain it was built for; a mixed-type
/// column is compared with the rules of whichever type its seed cell had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnComparator {
    column_type: ColumnType,
    direction: SortDirection,
    collator: Collator,
}

/// Build the comparator for a column type, direction and locale.
pub fn build_comparator(
    column_type: ColumnType,
    direction: SortDirection,
    locale: &Locale,
) -> ColumnComparator {
    ColumnComparator {
        column_type,
        direction,
        collator: Collator::new(locale),
    }
}

impl ColumnComparator {
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn locale(&self) -> &Locale {
        self.collator.locale()
    }

    /// Signed comparison signal for two cell values.
    pub fn compare(&self, a: &str, b: &str) -> f64 {
        match self.column_type {
            ColumnType::Alpha => self.compare_alpha(a, b),
            ColumnType::Numeric => self.subtract(numeric_value(a), numeric_value(b)),
            ColumnType::Date => self.subtract(date_value(a), date_value(b)),
        }
    }

    /// [`compare`](Self::compare) as an [`Ordering`]; zero and `NaN` are `Equal`.
    pub fn ordering(&self, a: &str, b: &str) -> Ordering {
        let signal = self.compare(a, b);
        if signal < 0.0 {
            Ordering::Less
        } else if signal > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    // Descending swaps operands instead of negating the ascending result.
    fn compare_alpha(&self, a: &str, b: &str) -> f64 {
        let ordering = match self.direction {
            SortDirection::Ascending => self.collator.compare(a, b),
            SortDirection::Descending => self.collator.compare(b, a),
        };
        match ordering {
            Ordering::Less => -1.0,
            Ordering::Equal => 0.0,
            Ordering::Greater => 1.0,
        }
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        match self.direction {
            SortDirection::Ascending => a - b,
            SortDirection::Descending => b - a,
        }
    }
}
