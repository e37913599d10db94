//! Core enums for sorting a table column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a single sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data category inferred for a column from its first non-empty cell.
///
/// The tag is derived once per sort pass and applied to every cell of the
/// column, so mixed-type columns are compared with whichever comparator the
/// seed cell selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Calendar dates or full month names.
    Date,
    /// Numbers, optionally decorated with `$`, `,`, `%` or ordinal suffixes.
    Numeric,
    /// Plain text, compared by locale collation.
    Alpha,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Numeric => "numeric",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
