//! Shared types for data table column sorting.
//!
//! These types sit between the table component that owns the rows and the
//! sorting core that infers a column type and builds a comparator.

pub mod error;
pub mod locale;
pub mod options;
pub mod row;
pub mod types;

pub use error::{Result, SortError};
pub use locale::{DEFAULT_LOCALE, Locale};
pub use options::SortOptions;
pub use row::RowSnapshot;
pub use types::{ColumnType, SortDirection};
