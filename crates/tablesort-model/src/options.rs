//! Per-invocation sort settings.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::types::SortDirection;

/// Options for one sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    /// Requested direction.
    pub direction: SortDirection,

    /// Locale for alpha collation, from the table's `lang` attribute.
    /// Defaults to `en-US`.
    #[serde(default)]
    pub locale: Locale,
}

impl SortOptions {
    pub fn new(direction: SortDirection) -> Self {
        Self {
            direction,
            locale: Locale::default(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Use the table's `lang` attribute, falling back to the default locale.
    #[must_use]
    pub fn with_lang(mut self, lang: Option<&str>) -> Self {
        self.locale = Locale::resolve(lang);
        self
    }
}
