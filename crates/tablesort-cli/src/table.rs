//! CSV table loading.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::{debug, warn};

use tablesort_model::SortError;

/// Errors that can occur while loading a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse the CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header and no rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Column lookup failed.
    #[error(transparent)]
    Column(#[from] SortError),
}

pub type Result<T> = std::result::Result<T, TableError>;

/// A loaded table: optional header row plus body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl CsvTable {
    /// Load a CSV file. When `has_header` is set the first record is the header row.
    pub fn load(path: &Path, has_header: bool) -> Result<Self> {
        if !path.exists() {
            return Err(TableError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| TableError::CsvRead {
                path: path.to_path_buf(),
                source,
            })?;

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| TableError::CsvRead {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if records.is_empty() {
            return Err(TableError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }

        let headers = if has_header {
            let header_row = records.remove(0);
            Some(
                header_row
                    .iter()
                    .map(String::as_str)
                    .map(normalize_header)
                    .collect(),
            )
        } else {
            None
        };

        let table = Self {
            headers,
            rows: records,
        };
        if table.rows.iter().any(|row| row.len() != table.column_count()) {
            warn!(path = %path.display(), "rows have differing cell counts; missing cells read as empty");
        }
        debug!(
            path = %path.display(),
            rows = table.rows.len(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Widest row (or header) length.
    pub fn column_count(&self) -> usize {
        let body = self
            .rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let header = self.headers.as_ref().map_or(0, Vec::len);
        body.max(header)
    }

    /// Display name for a column: its header, or `#index` without headers.
    pub fn column_name(&self, column: usize) -> String {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(column))
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("#{column}"))
    }

    /// Resolve a column given by header name (case-insensitive) or zero-based index.
    pub fn resolve_column(&self, spec: &str) -> std::result::Result<usize, SortError> {
        let trimmed = spec.trim();
        if let Some(headers) = &self.headers
            && let Some(position) = headers
                .iter()
                .position(|name| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(position);
        }

        let index = trimmed
            .strip_prefix('#')
            .unwrap_or(trimmed)
            .parse::<usize>()
            .map_err(|_| SortError::UnknownColumn(trimmed.to_string()))?;
        let count = self.column_count();
        if index >= count {
            return Err(SortError::ColumnOutOfRange { index, count });
        }
        Ok(index)
    }
}
