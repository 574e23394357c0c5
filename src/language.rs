//! Language tags selecting the collation rules of an equivalence check.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SysdictError};

/// Primary language subtag followed by optional region/script/variant subtags.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{1,8})*$").expect("valid language tag pattern")
});

/// A BCP 47 style language tag such as `en`, `de-DE` or `tr`.
///
/// Tags are stored in canonical form: the primary subtag is lowercased and
/// `_` separators are replaced with `-`, so `en_US` and `en-us` both parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    tag: String,
}

impl Language {
    /// Parse a language tag.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if !TAG_PATTERN.is_match(tag) {
            return Err(SysdictError::invalid_language(tag));
        }

        let mut subtags = tag.split(['-', '_']);
        let mut canonical = subtags
            .next()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        for subtag in subtags {
            canonical.push('-');
            // Region subtags are conventionally uppercase ("de-DE").
            if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                canonical.push_str(&subtag.to_ascii_uppercase());
            } else {
                canonical.push_str(subtag);
            }
        }

        Ok(Language { tag: canonical })
    }

    /// English, the default language.
    pub fn english() -> Self {
        Language {
            tag: "en".to_string(),
        }
    }

    /// The full canonical tag.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The primary language subtag, e.g. `de` for `de-AT`.
    pub fn primary(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Whether case folding follows the Turkic dotted/dotless I rules.
    pub fn has_turkic_casing(&self) -> bool {
        matches!(self.primary(), "tr" | "az")
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Language {
    type Err = SysdictError;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl TryFrom<String> for Language {
    type Error = SysdictError;

    fn try_from(value: String) -> Result<Self> {
        Language::parse(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.tag
    }
}
