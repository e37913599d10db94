//! Row reordering with a column comparator.
//!
//! The comparator is not a total order on malformed input (a `NaN` signal
//! compares equal to everything), so rows are ordered with a stable
//! bottom-up merge sort that accepts any comparison results.

use std::cmp::Ordering;

use tablesort_model::{ColumnType, RowSnapshot, SortOptions};
use tracing::debug;

use crate::comparator::ColumnComparator;
use crate::coordinator::{cell_value, compare_func};

/// Row indices in sorted order. Rows comparing equal keep their input order.
pub fn sorted_order<R: RowSnapshot>(
    rows: &[R],
    column: usize,
    comparator: &ColumnComparator,
) -> Vec<usize> {
    let values: Vec<&str> = rows.iter().map(|row| cell_value(row, column)).collect();
    merge_sort_indices(values.len(), |left, right| {
        comparator.ordering(values[left], values[right])
    })
}

/// Reorder `rows` in place by `column`.
pub fn sort_rows<R: RowSnapshot>(rows: &mut Vec<R>, column: usize, comparator: &ColumnComparator) {
    let order = sorted_order(rows, column, comparator);
    let mut slots: Vec<Option<R>> = rows.drain(..).map(Some).collect();
    rows.extend(
        order
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take)),
    );
}

/// Derive a comparator for `column` and reorder `rows` with it.
///
/// Returns the column type the rows were sorted by, or `None` when the column
/// is empty and the rows were left untouched.
pub fn sort_column<R: RowSnapshot>(
    rows: &mut Vec<R>,
    column: usize,
    options: &SortOptions,
) -> Option<ColumnType> {
    let comparator = compare_func(rows, column, options.direction, &options.locale)?;
    sort_rows(rows, column, &comparator);
    debug!(
        column,
        rows = rows.len(),
        direction = %options.direction,
        column_type = %comparator.column_type(),
        "sorted rows"
    );
    Some(comparator.column_type())
}

fn merge_sort_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            while left < mid && right < end {
                if compare(order[left], order[right]) == Ordering::Greater {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&order[left..mid]);
            merged.extend_from_slice(&order[right..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_is_stable() {
        let keys = [2, 1, 2, 1, 0];
        let order = merge_sort_indices(keys.len(), |a, b| keys[a].cmp(&keys[b]));
        assert_eq!(order, vec![4, 1, 3, 0, 2]);
    }

    #[test]
    fn test_merge_sort_tolerates_inconsistent_comparisons() {
        // Every pair reports Less; must terminate with a permutation.
        let order = merge_sort_indices(7, |_, _| Ordering::Less);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_merge_sort_trivial_lengths() {
        assert!(merge_sort_indices(0, |_, _| Ordering::Equal).is_empty());
        assert_eq!(merge_sort_indices(1, |_, _| Ordering::Equal), vec![0]);
    }
}
