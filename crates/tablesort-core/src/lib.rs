//! Column sorting core for data tables.
//!
//! Given the body rows of a table, a column index and a direction, this crate
//! infers the column's data type from its first non-empty cell and returns a
//! comparator over raw cell text, or `None` when the column is empty.
//!
//! # Overview
//!
//! - **Type classification**: date (calendar dates, full month names),
//!   numeric (`$`, `,`, `%` and ordinal decoration allowed), or alpha
//! - **Comparator construction**: subtraction for numeric and date columns,
//!   base-strength collation for alpha columns
//! - **Column coordination**: seed selection and the "no sort" signal
//! - **Reordering**: a stable sort helper for callers that own plain row data
//!
//! # Example
//!
//! ```
//! use tablesort_core::compare_func;
//! use tablesort_model::{Locale, SortDirection};
//!
//! let rows = vec![vec!["$1,200"], vec!["$950"], vec![""]];
//! let comparator = compare_func(&rows, 0, SortDirection::Ascending, &Locale::default())
//!     .expect("column has data");
//!
//! let mut values = vec!["$1,200", "$950", ""];
//! values.sort_by(|a, b| comparator.ordering(a, b));
//! assert_eq!(values, vec!["", "$950", "$1,200"]);
//! ```
//!
//! # Design Principles
//!
//! - **Single sample**: the first non-empty cell decides the whole column
//! - **Stateless**: nothing is cached between sort passes
//! - **Quirks preserved**: malformed numbers yield `NaN` signals, not errors

mod classify;
mod collation;
mod comparator;
mod coordinator;
mod reorder;

pub mod normalization;
pub mod redact;

pub use classify::classify_value;
pub use collation::Collator;
pub use comparator::{ColumnComparator, build_comparator};
pub use coordinator::{ColumnClassification, classify_column, compare_func};
pub use reorder::{sort_column, sort_rows, sorted_order};
