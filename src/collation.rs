//! Pairwise word equivalence under language-specific sensitivity rules.
//!
//! The matcher only needs a yes/no answer to "are these two strings the same
//! word?", so the capability is the [`Comparator`] trait. [`UnicodeComparator`]
//! is the bundled implementation; any closure `Fn(&str, &str) -> bool` is a
//! comparator too, which lets callers plug in their own collation library.
//!
//! # Examples
//!
//! ```
//! use sysdict::collation::{CollationOptions, Comparator, UnicodeComparator};
//!
//! let strict = UnicodeComparator::new(CollationOptions::default());
//! assert!(!strict.equivalent("ABBA", "Abba"));
//!
//! let relaxed = UnicodeComparator::new(CollationOptions {
//!     ignore_case: true,
//!     ignore_diacritics: true,
//!     ..Default::default()
//! });
//! assert!(relaxed.equivalent("ÄBBA", "Abba"));
//! ```

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::language::Language;

/// Sensitivity configuration of an equivalence test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollationOptions {
    /// Language whose collation rules apply.
    pub language: Language,
    /// Treat case differences as insignificant.
    pub ignore_case: bool,
    /// Treat diacritic differences as insignificant.
    pub ignore_diacritics: bool,
}

/// Trait for pairwise "same word" tests.
///
/// Equivalence is not an ordering; implementations only promise a symmetric
/// answer for the configuration they were built with.
pub trait Comparator {
    /// Report whether `a` and `b` are equivalent.
    fn equivalent(&self, a: &str, b: &str) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(&str, &str) -> bool,
{
    fn equivalent(&self, a: &str, b: &str) -> bool {
        self(a, b)
    }
}

/// Code points that collate as completely ignorable.
const IGNORABLE: &[char] = &[
    '\u{00AD}', // soft hyphen
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space
];

/// Combining diacritical mark blocks. Vowel signs of Brahmic and Thai
/// scripts are combining marks too, but they carry primary weight and are
/// never stripped.
const DIACRITIC_RANGES: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

fn is_diacritic(c: char) -> bool {
    DIACRITIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Base letter of a letter whose stroke or bar has no canonical decomposition.
fn strip_stroke(c: char) -> char {
    match c {
        'ø' => 'o',
        'Ø' => 'O',
        'ł' => 'l',
        'Ł' => 'L',
        'đ' => 'd',
        'Đ' => 'D',
        'ħ' => 'h',
        'Ħ' => 'H',
        'ŧ' => 't',
        'Ŧ' => 'T',
        'ƀ' => 'b',
        'Ƀ' => 'B',
        'ɨ' => 'i',
        'Ɨ' => 'I',
        'ƶ' => 'z',
        'Ƶ' => 'Z',
        _ => c,
    }
}

/// A comparator built on Unicode normalization and case folding.
///
/// Both sides are always compared in canonically decomposed form, so a
/// precomposed `é` equals `e` followed by U+0301 even at full sensitivity.
/// Ignoring case also folds compatibility forms (`Ａ` is `a`, `ﬁ` is `fi`).
/// Ignoring diacritics strips combining diacritical marks and the stroke of
/// letters such as `ø` and `ł`.
#[derive(Debug, Clone)]
pub struct UnicodeComparator {
    options: CollationOptions,
    turkic: bool,
}

impl UnicodeComparator {
    /// Create a comparator for the given options.
    pub fn new(options: CollationOptions) -> Self {
        let turkic = options.language.has_turkic_casing();
        UnicodeComparator { options, turkic }
    }

    /// The options this comparator was built with.
    pub fn options(&self) -> &CollationOptions {
        &self.options
    }

    /// Reduce a string to the form in which equivalent strings are identical.
    pub fn fold(&self, text: &str) -> String {
        let cased: Cow<'_, str> = if self.options.ignore_case {
            // Compatibility forms may decompose to capitals (U+210C is `H`).
            let compat: String = self.fold_case(text).nfkd().collect();
            Cow::Owned(self.fold_case(&compat))
        } else {
            Cow::Borrowed(text)
        };

        let ignore_diacritics = self.options.ignore_diacritics;
        cased
            .nfd()
            .filter(|c| !IGNORABLE.contains(c))
            .filter(|&c| !(ignore_diacritics && is_diacritic(c)))
            .map(|c| if ignore_diacritics { strip_stroke(c) } else { c })
            .collect()
    }

    fn fold_case(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                'I' if self.turkic => folded.push('ı'),
                'İ' if self.turkic => folded.push('i'),
                'ß' | 'ẞ' => folded.push_str("ss"),
                'ς' => folded.push('σ'),
                _ => folded.extend(c.to_lowercase()),
            }
        }
        folded
    }
}

impl Default for UnicodeComparator {
    fn default() -> Self {
        UnicodeComparator::new(CollationOptions::default())
    }
}

impl Comparator for UnicodeComparator {
    fn equivalent(&self, a: &str, b: &str) -> bool {
        a == b || self.fold(a) == self.fold(b)
    }
}
