use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column index {index} out of range (table has {count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, SortError>;
