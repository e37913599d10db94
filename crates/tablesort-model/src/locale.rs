//! Locale tags used by alpha collation.
//!
//! The table component passes its `lang` attribute through unchanged; tags
//! are validated loosely (BCP 47 shape, no registry lookup) and canonicalized
//! so `en_us` and `EN-us` compare equal to `en-US`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// Locale used when the caller supplies none.
pub const DEFAULT_LOCALE: &str = "en-US";

/// A canonicalized language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Parse and canonicalize a language tag.
    ///
    /// Subtags are separated by `-` or `_` and must be 1-8 ASCII
    /// alphanumerics; the primary subtag must be 2-8 letters.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SortError::InvalidLocale(raw.to_string()));
        }

        let mut subtags = Vec::new();
        for (position, subtag) in trimmed.split(['-', '_']).enumerate() {
            let valid_shape = (1..=8).contains(&subtag.len())
                && subtag.chars().all(|ch| ch.is_ascii_alphanumeric());
            if !valid_shape {
                return Err(SortError::InvalidLocale(raw.to_string()));
            }
            if position == 0 {
                if subtag.len() < 2 || !subtag.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(SortError::InvalidLocale(raw.to_string()));
                }
                subtags.push(subtag.to_ascii_lowercase());
            } else {
                subtags.push(canonical_subtag(subtag));
            }
        }

        Ok(Self {
            tag: subtags.join("-"),
        })
    }

    /// Resolve the locale from an optional `lang` attribute value.
    ///
    /// Missing, blank or malformed values fall back to [`DEFAULT_LOCALE`].
    pub fn resolve(lang: Option<&str>) -> Self {
        lang.and_then(|value| Self::parse(value).ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Primary language subtag (`"en"` for `"en-US"`).
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }
}

fn canonical_subtag(subtag: &str) -> String {
    let alphabetic = subtag.chars().all(|ch| ch.is_ascii_alphabetic());
    match subtag.len() {
        // Region: "us" -> "US"
        2 if alphabetic => subtag.to_ascii_uppercase(),
        // Script: "hant" -> "Hant"
        4 if alphabetic => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl std::str::FromStr for Locale {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}
