//! Word lookup tables for month names and ordinal words.

/// Full English month names in calendar order.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Ordinal words and their numeric rank.
const ORDINAL_WORDS: [(&str, u32); 20] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
    ("eleventh", 11),
    ("twelfth", 12),
    ("thirteenth", 13),
    ("fourteenth", 14),
    ("fifteenth", 15),
    ("sixteenth", 16),
    ("seventeenth", 17),
    ("eighteenth", 18),
    ("nineteenth", 19),
    ("twentieth", 20),
];

/// Rank (1-12) of a full month name, case-insensitive.
///
/// Abbreviations are not month names here; "Jan" sorts as text.
pub fn month_rank(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(trimmed))
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Rank of an ordinal word ("first" -> 1), case-insensitive.
pub fn ordinal_rank(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    ORDINAL_WORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(trimmed))
        .map(|(_, rank)| *rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_rank() {
        assert_eq!(month_rank("january"), Some(1));
        assert_eq!(month_rank("March"), Some(3));
        assert_eq!(month_rank("DECEMBER"), Some(12));
        assert_eq!(month_rank("  May "), Some(5));
    }

    #[test]
    fn test_month_rank_rejects_abbreviations() {
        assert_eq!(month_rank("Jan"), None);
        assert_eq!(month_rank("Sept"), None);
        assert_eq!(month_rank(""), None);
    }

    #[test]
    fn test_ordinal_rank() {
        assert_eq!(ordinal_rank("first"), Some(1));
        assert_eq!(ordinal_rank("Twelfth"), Some(12));
        assert_eq!(ordinal_rank("twentieth"), Some(20));
        assert_eq!(ordinal_rank("1st"), None);
        assert_eq!(ordinal_rank("firsts"), None);
    }
}
