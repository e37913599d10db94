//! Read-only view of a table body row.

/// A row of the table body, exposing cell text by column index.
///
/// Implementations return the raw text content of the cell; callers of the
/// sorting core trim it. `None` means the row has no cell at that position
/// and is treated like an empty cell.
pub trait RowSnapshot {
    fn cell_text(&self, column: usize) -> Option<&str>;

    /// Number of cells in the row.
    fn cell_count(&self) -> usize;
}

impl RowSnapshot for Vec<String> {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).map(String::as_str)
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl RowSnapshot for [String] {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).map(String::as_str)
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl RowSnapshot for Vec<&str> {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).copied()
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl RowSnapshot for [&str] {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).copied()
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> RowSnapshot for [&str; N] {
    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).copied()
    }

    fn cell_count(&self) -> usize {
        N
    }
}

impl<R: RowSnapshot + ?Sized> RowSnapshot for &R {
    fn cell_text(&self, column: usize) -> Option<&str> {
        (**self).cell_text(column)
    }

    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }
}
