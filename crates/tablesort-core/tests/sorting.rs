//! End-to-end column sorting tests.

use tablesort_core::{classify_column, compare_func, sort_column, sort_rows};
use tablesort_model::{ColumnType, Locale, SortDirection, SortOptions};

fn single_column(values: &[&str]) -> Vec<Vec<String>> {
    values.iter().map(|value| vec![(*value).to_string()]).collect()
}

fn sorted(values: &[&str], direction: SortDirection) -> Option<Vec<String>> {
    let mut rows = single_column(values);
    sort_column(&mut rows, 0, &SortOptions::new(direction))?;
    Some(rows.into_iter().map(|mut row| row.remove(0)).collect())
}

#[test]
fn currency_column_ascending_puts_blank_first() {
    assert_eq!(
        sorted(&["$1,200", "$950", ""], SortDirection::Ascending).unwrap(),
        vec!["", "$950", "$1,200"]
    );
}

#[test]
fn currency_column_descending_puts_blank_last() {
    assert_eq!(
        sorted(&["$950", "", "$1,200"], SortDirection::Descending).unwrap(),
        vec!["$1,200", "$950", ""]
    );
}

#[test]
fn month_column_sorts_by_calendar_order() {
    assert_eq!(
        sorted(&["March", "January", "December"], SortDirection::Ascending).unwrap(),
        vec!["January", "March", "December"]
    );
}

#[test]
fn text_column_descending_ignores_case() {
    assert_eq!(
        sorted(&["apple", "Banana", "cherry"], SortDirection::Descending).unwrap(),
        vec!["cherry", "Banana", "apple"]
    );
}

#[test]
fn empty_column_is_not_sorted() {
    let rows = single_column(&["", "", ""]);
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        assert!(compare_func(&rows, 0, direction, &Locale::default()).is_none());
        assert!(sorted(&["", "", ""], direction).is_none());
    }
}

#[test]
fn ordinal_column_sorts_numerically() {
    assert_eq!(
        sorted(&["3rd", "1st", "2nd"], SortDirection::Ascending).unwrap(),
        vec!["1st", "2nd", "3rd"]
    );
}

#[test]
fn ordinal_words_sort_with_suffixed_ordinals() {
    assert_eq!(
        sorted(&["third", "1st", "second", "4th"], SortDirection::Ascending).unwrap(),
        vec!["1st", "second", "third", "4th"]
    );
}

#[test]
fn date_column_sorts_by_timestamp() {
    assert_eq!(
        sorted(
            &["2024-03-01", "", "2023-12-31", "2024-01-15"],
            SortDirection::Ascending
        )
        .unwrap(),
        vec!["", "2023-12-31", "2024-01-15", "2024-03-01"]
    );
    assert_eq!(
        sorted(
            &["03/01/2024", "12/31/2023", "", "01/15/2024"],
            SortDirection::Descending
        )
        .unwrap(),
        vec!["03/01/2024", "01/15/2024", "12/31/2023", ""]
    );
}

#[test]
fn short_year_dates_sort_by_century() {
    assert_eq!(
        sorted(&["06/15/2024", "01/01/00", "12/31/99"], SortDirection::Ascending).unwrap(),
        vec!["12/31/99", "01/01/00", "06/15/2024"]
    );
}

#[test]
fn percent_column_sorts_numerically() {
    assert_eq!(
        sorted(&["100%", "9.5%", "25%"], SortDirection::Ascending).unwrap(),
        vec!["9.5%", "25%", "100%"]
    );
}

#[test]
fn seed_cell_decides_mixed_column() {
    // The first non-empty cell is numeric, so text cells resolve to NaN and
    // compare equal to everything; the sort still completes.
    let rows = single_column(&["", "10", "banana", "2"]);
    let classification = classify_column(&rows, 0).unwrap();
    assert_eq!(classification.column_type, ColumnType::Numeric);
    assert_eq!(classification.seed_row, 1);

    let result = sorted(&["", "10", "banana", "2"], SortDirection::Ascending).unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result[0], "");
}

#[test]
fn equal_cells_keep_document_order() {
    let mut rows = vec![
        vec!["apple".to_string(), "1".to_string()],
        vec!["Apple".to_string(), "2".to_string()],
        vec!["APPLE".to_string(), "3".to_string()],
    ];
    let comparator = compare_func(&rows, 0, SortDirection::Descending, &Locale::default()).unwrap();
    sort_rows(&mut rows, 0, &comparator);
    let ids: Vec<&str> = rows.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn sorts_by_requested_column_only() {
    let mut rows = vec![
        vec!["b", "3rd"],
        vec!["a", "1st"],
        vec!["c", "2nd"],
    ];
    let applied = sort_column(&mut rows, 1, &SortOptions::new(SortDirection::Ascending));
    assert_eq!(applied, Some(ColumnType::Numeric));
    assert_eq!(rows, vec![vec!["a", "1st"], vec!["c", "2nd"], vec!["b", "3rd"]]);
}

#[test]
fn cell_text_is_trimmed_before_comparison() {
    assert_eq!(
        sorted(&["  $20 ", "$3", "\t$100"], SortDirection::Ascending).unwrap(),
        vec!["$3", "  $20 ", "\t$100"]
    );
}

#[test]
fn locale_tailoring_changes_text_order() {
    let values = ["zebra", "ängel", "apple"];
    let mut english = single_column(&values);
    sort_column(&mut english, 0, &SortOptions::new(SortDirection::Ascending));
    assert_eq!(english, single_column(&["ängel", "apple", "zebra"]));

    let mut swedish = single_column(&values);
    let options = SortOptions::new(SortDirection::Ascending).with_lang(Some("sv"));
    sort_column(&mut swedish, 0, &options);
    assert_eq!(swedish, single_column(&["apple", "zebra", "ängel"]));
}

#[test]
fn stroke_letters_sort_with_their_base_letter() {
    assert_eq!(
        sorted(&["Zoe", "Łukasz", "Øyvind", "Mia"], SortDirection::Ascending).unwrap(),
        vec!["Łukasz", "Mia", "Øyvind", "Zoe"]
    );
}

#[test]
fn repeated_invocations_agree() {
    let rows = single_column(&["$5", "", "$1,000", "$75", "$5"]);
    let first = compare_func(&rows, 0, SortDirection::Ascending, &Locale::default()).unwrap();
    let second = compare_func(&rows, 0, SortDirection::Ascending, &Locale::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        tablesort_core::sorted_order(&rows, 0, &first),
        tablesort_core::sorted_order(&rows, 0, &second)
    );
}

#[test]
fn type_is_rederived_after_data_changes() {
    let mut rows = single_column(&["apple", "pear"]);
    assert_eq!(
        classify_column(&rows, 0).map(|c| c.column_type),
        Some(ColumnType::Alpha)
    );
    rows[0][0] = "2024-05-01".to_string();
    assert_eq!(
        classify_column(&rows, 0).map(|c| c.column_type),
        Some(ColumnType::Date)
    );
}
