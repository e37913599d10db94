//! Locale-aware string comparison at base strength.
//!
//! Base strength ignores case and accents: `"a"`, `"A"` and `"á"` compare
//! equal. Characters are ordered by class first (whitespace, punctuation,
//! symbols, digits, letters), then by their folded base letter. Letters
//! without a canonical decomposition (`ł`, `ø`, `ß`, `æ`) fold through a small
//! root table, expanding where the letter stands for two. A few
//! languages treat accented letters as distinct letters sorted after `z` (or
//! right after their base letter); those tailorings are applied by primary
//! language subtag.

use std::cmp::Ordering;

use tablesort_model::Locale;
use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

/// Letters that collate as separate letters in a language, in order.
///
/// Each entry is `(letter, base, tier)`: the letter sorts after every other
/// letter sharing `base`, ordered among its peers by `tier`.
type Tailoring = &'static [(char, char, u8)];

const NORDIC_SV_FI: Tailoring = &[('å', 'z', 1), ('ä', 'z', 2), ('ö', 'z', 3)];
const NORDIC_DA_NB: Tailoring = &[('æ', 'z', 1), ('ø', 'z', 2), ('å', 'z', 3)];
const SPANISH: Tailoring = &[('ñ', 'n', 1)];

/// Root folds for lowercase letters that NFKD leaves intact.
const ROOT_FOLDS: &[(char, &str)] = &[
    ('ł', "l"),
    ('ø', "o"),
    ('đ', "d"),
    ('ħ', "h"),
    ('ı', "i"),
    ('ŧ', "t"),
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
];

fn tailoring_for(language: &str) -> Tailoring {
    match language {
        "sv" | "fi" => NORDIC_SV_FI,
        "da" | "nb" | "nn" | "no" => NORDIC_DA_NB,
        "es" => SPANISH,
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// One primary collation weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Weight {
    class: CharClass,
    base: char,
    tier: u8,
}

/// Base-strength collator bound to one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collator {
    locale: Locale,
    tailoring: Tailoring,
}

impl Collator {
    pub fn new(locale: &Locale) -> Self {
        Self {
            locale: locale.clone(),
            tailoring: tailoring_for(locale.language()),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Compare two strings, ignoring case and accents.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.weights(a).cmp(self.weights(b))
    }

    fn weights<'a>(&'a self, value: &'a str) -> impl Iterator<Item = Weight> + 'a {
        value
            .nfc()
            .flat_map(char::to_lowercase)
            .flat_map(move |ch| self.char_weights(ch))
    }

    fn char_weights(&self, ch: char) -> Vec<Weight> {
        if let Some((_, base, tier)) = self.tailoring.iter().find(|(letter, _, _)| *letter == ch) {
            return vec![Weight {
                class: CharClass::Letter,
                base: *base,
                tier: *tier,
            }];
        }
        if let Some((_, folded)) = ROOT_FOLDS.iter().find(|(letter, _)| *letter == ch) {
            return folded
                .chars()
                .map(|base| Weight {
                    class: CharClass::Letter,
                    base,
                    tier: 0,
                })
                .collect();
        }

        std::iter::once(ch)
            .nfkd()
            .filter(|decomposed| !is_combining_mark(*decomposed))
            .flat_map(char::to_lowercase)
            .map(|base| Weight {
                class: classify_char(base),
                base,
                tier: 0,
            })
            .collect()
    }
}

impl Default for Collator {
    fn default() -> Self {
        Self::new(&Locale::default())
    }
}

fn classify_char(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else if is_symbol(ch) {
        CharClass::Symbol
    } else {
        CharClass::Punctuation
    }
}

/// Math, currency, modifier and other symbols, as opposed to punctuation.
fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '$' | '+'
            | '<'
            | '='
            | '>'
            | '^'
            | '`'
            | '|'
            | '~'
            | '\u{a2}'..='\u{a6}'
            | '\u{a8}'
            | '\u{a9}'
            | '\u{ac}'
            | '\u{ae}'..='\u{b1}'
            | '\u{b4}'
            | '\u{b8}'
            | '\u{d7}'
            | '\u{f7}'
            | '\u{20a0}'..='\u{20cf}'
            | '\u{2100}'..='\u{214f}'
            | '\u{2190}'..='\u{23ff}'
            | '\u{2500}'..='\u{27bf}'
            | '\u{2900}'..='\u{2bff}'
    )
}
