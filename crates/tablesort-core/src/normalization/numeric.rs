//! Numeric cell resolution.
//!
//! Cells are cleaned of cosmetic decoration before parsing: currency `$`,
//! thousands separator `,`, percent `%` and the ordinal suffixes `st`, `nd`,
//! `rd`, `th`. Suffix removal is a single left-to-right pass, so text exposed
//! by one removal is not matched again.

use super::lookup::ordinal_rank;

const COSMETIC_CHARS: [char; 3] = ['$', ',', '%'];
const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Remove cosmetic characters and ordinal suffixes from a cell value.
///
/// ```
/// use tablesort_core::normalization::strip_cosmetics;
///
/// assert_eq!(strip_cosmetics("$1,200"), "1200");
/// assert_eq!(strip_cosmetics("3rd"), "3");
/// ```
pub fn strip_cosmetics(value: &str) -> String {
    let mut cleaned = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(ch) = rest.chars().next() {
        if COSMETIC_CHARS.contains(&ch) {
            rest = &rest[ch.len_utf8()..];
            continue;
        }
        if let Some(suffix) = ORDINAL_SUFFIXES.iter().find(|suffix| rest.starts_with(**suffix)) {
            rest = &rest[suffix.len()..];
            continue;
        }
        cleaned.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    cleaned
}

/// Parse a cleaned string the way a script `Number(...)` coercion would.
///
/// Accepts optional sign, decimal and exponent notation, `Infinity`, and
/// unsigned `0x`/`0o`/`0b` integers. Anything else is `NaN`.
pub fn parse_number(value: &str) -> f64 {
    let trimmed = value.trim();

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(parsed) = parse_radix_integer(trimmed) {
        return parsed;
    }

    // `f64::from_str` also accepts "inf" and "nan"; those are not numbers here.
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if !unsigned.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_radix_integer(value: &str) -> Option<f64> {
    let prefix = value.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    // Precision loss above 2^53 matches float coercion.
    #[allow(clippy::cast_precision_loss)]
    let parsed = u64::from_str_radix(digits, radix).map_or(f64::NAN, |number| number as f64);
    Some(parsed)
}

/// Resolve a cell to the number it sorts by.
///
/// Blank cells, and cells holding only decoration, are negative infinity so
/// they sort first ascending. Ordinal words use their rank. Unparseable text
/// is `NaN`.
pub fn numeric_value(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return f64::NEG_INFINITY;
    }
    if let Some(rank) = ordinal_rank(trimmed) {
        return f64::from(rank);
    }

    let cleaned = strip_cosmetics(trimmed);
    if cleaned.trim().is_empty() {
        return f64::NEG_INFINITY;
    }
    parse_number(&cleaned)
}

/// Check whether a non-empty sample cell should make its column numeric.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if ordinal_rank(trimmed).is_some() {
        return true;
    }

    let cleaned = strip_cosmetics(trimmed);
    !cleaned.trim().is_empty() && parse_number(&cleaned).is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_currency_and_separators() {
        assert_eq!(strip_cosmetics("$1,200"), "1200");
        assert_eq!(strip_cosmetics("1,234,567.89"), "1234567.89");
        assert_eq!(strip_cosmetics("45%"), "45");
    }

    #[test]
    fn test_strip_ordinal_suffixes() {
        assert_eq!(strip_cosmetics("1st"), "1");
        assert_eq!(strip_cosmetics("2nd"), "2");
        assert_eq!(strip_cosmetics("23rd"), "23");
        assert_eq!(strip_cosmetics("11th"), "11");
    }

    #[test]
    fn test_strip_single_pass() {
        // Removing "nd" exposes "st", which stays.
        assert_eq!(strip_cosmetics("sndt"), "st");
    }

    #[test]
    fn test_parse_number_decimal() {
        assert_eq!(parse_number("123"), 123.0);
        assert_eq!(parse_number("-45.5"), -45.5);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1.5e3"), 1500.0);
        assert_eq!(parse_number("  12  "), 12.0);
    }

    #[test]
    fn test_parse_number_specials() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("1.2.3").is_nan());
        assert!(parse_number(".").is_nan());
    }

    #[test]
    fn test_parse_number_radix() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("0xZZ").is_nan());
    }

    #[test]
    fn test_numeric_value_blank_is_minimum() {
        assert_eq!(numeric_value(""), f64::NEG_INFINITY);
        assert_eq!(numeric_value("   "), f64::NEG_INFINITY);
        assert_eq!(numeric_value("$"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_numeric_value_decorated() {
        assert_eq!(numeric_value("$1,200"), 1200.0);
        assert_eq!(numeric_value("$950"), 950.0);
        assert_eq!(numeric_value("12.5%"), 12.5);
        assert_eq!(numeric_value("3rd"), 3.0);
        assert_eq!(numeric_value("-$5"), -5.0);
    }

    #[test]
    fn test_numeric_value_ordinal_words() {
        assert_eq!(numeric_value("first"), 1.0);
        assert_eq!(numeric_value("Third"), 3.0);
    }

    #[test]
    fn test_numeric_value_unparseable_is_nan() {
        assert!(numeric_value("n/a").is_nan());
        assert!(numeric_value("($5)").is_nan());
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("$1,200"));
        assert!(is_numeric("42%"));
        assert!(is_numeric("1st"));
        assert!(is_numeric("second"));
        assert!(!is_numeric("$"));
        assert!(!is_numeric("apple"));
        assert!(!is_numeric("Infinity"));
        assert!(!is_numeric(""));
    }
}
