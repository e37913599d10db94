//! Property tests for comparator ordering.

use proptest::prelude::*;
use tablesort_core::{compare_func, sort_column};
use tablesort_model::{ColumnType, Locale, SortDirection, SortOptions};

/// Render an integer the way a currency column might.
fn currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn rows_of(values: &[String]) -> Vec<Vec<String>> {
    values.iter().map(|value| vec![value.clone()]).collect()
}

proptest! {
    #[test]
    fn currency_columns_sort_by_value(
        amounts in proptest::collection::vec(proptest::option::of(-5_000_000i64..5_000_000), 1..40),
        descending in any::<bool>(),
    ) {
        prop_assume!(amounts.iter().any(Option::is_some));
        let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
        let cells: Vec<String> = amounts
            .iter()
            .map(|amount| amount.map(currency).unwrap_or_default())
            .collect();

        let mut rows = rows_of(&cells);
        let applied = sort_column(&mut rows, 0, &SortOptions::new(direction));
        prop_assert_eq!(applied, Some(ColumnType::Numeric));

        let mut expected = amounts.clone();
        expected.sort();
        if descending {
            expected.reverse();
        }
        let expected: Vec<String> = expected
            .into_iter()
            .map(|amount| amount.map(currency).unwrap_or_default())
            .collect();
        let actual: Vec<String> = rows.into_iter().map(|mut row| row.remove(0)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn numeric_comparator_is_antisymmetric(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let rows = vec![vec![a.to_string()]];
        let comparator = compare_func(&rows, 0, SortDirection::Ascending, &Locale::default()).unwrap();
        let (left, right) = (a.to_string(), b.to_string());
        prop_assert_eq!(
            comparator.ordering(&left, &right),
            comparator.ordering(&right, &left).reverse()
        );
    }

    #[test]
    fn alpha_descending_mirrors_ascending(a in "[a-zA-Z ]{1,12}", b in "[a-zA-Z ]{1,12}") {
        let rows = vec![vec!["seed text".to_string()]];
        let locale = Locale::default();
        let ascending = compare_func(&rows, 0, SortDirection::Ascending, &locale).unwrap();
        let descending = compare_func(&rows, 0, SortDirection::Descending, &locale).unwrap();
        prop_assert_eq!(descending.compare(&a, &b), ascending.compare(&b, &a));
    }
}
