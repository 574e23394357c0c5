//! Word validity checks by scanning sources with an equivalence comparator.
//!
//! The matcher never materializes a vocabulary. Sources are scanned in
//! priority order and the scan stops at the first equivalent line, so a check
//! costs up to one full pass over every source. For many lookups against the
//! same sources, build a [`VocabularySet`](crate::vocabulary::VocabularySet)
//! once and use [`contains_equivalent`](crate::vocabulary::contains_equivalent).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collation::{CollationOptions, Comparator, UnicodeComparator};
use crate::config::VocabularyConfig;
use crate::error::Result;
use crate::loader::{FsLineLoader, LineLoader};
use crate::source::SourceLocations;

/// Where a checked word was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The line that matched, exactly as stored in the source.
    pub entry: String,
    /// The source containing the line.
    pub source: PathBuf,
    /// 1-based line number within the source.
    pub line: usize,
}

/// Checks words against sources using a comparator built per call.
///
/// `F` turns the collation part of a configuration into a comparator; the
/// default uses [`UnicodeComparator`].
pub struct WordMatcher<L, F = fn(CollationOptions) -> UnicodeComparator> {
    locations: SourceLocations,
    loader: L,
    comparator_factory: F,
}

impl WordMatcher<FsLineLoader> {
    /// A matcher over the system word lists on the local filesystem.
    pub fn system() -> Self {
        WordMatcher::new(SourceLocations::system(), FsLineLoader::new())
    }
}

impl<L: LineLoader> WordMatcher<L> {
    /// Create a matcher using the bundled Unicode comparator.
    pub fn new(locations: SourceLocations, loader: L) -> Self {
        WordMatcher {
            locations,
            loader,
            comparator_factory: UnicodeComparator::new,
        }
    }
}

impl<L, F, C> WordMatcher<L, F>
where
    L: LineLoader,
    F: Fn(CollationOptions) -> C,
    C: Comparator,
{
    /// Create a matcher with a custom comparator factory.
    pub fn with_comparator(locations: SourceLocations, loader: L, comparator_factory: F) -> Self {
        WordMatcher {
            locations,
            loader,
            comparator_factory,
        }
    }

    /// The source table this matcher resolves against.
    pub fn locations(&self) -> &SourceLocations {
        &self.locations
    }

    /// Report whether `word` is equivalent to a line of any resolvable source.
    pub fn check(&self, word: &str, config: &VocabularyConfig) -> Result<bool> {
        Ok(self.find(word, config)?.is_some())
    }

    /// Find the first line equivalent to `word`, in source priority order.
    pub fn find(&self, word: &str, config: &VocabularyConfig) -> Result<Option<WordMatch>> {
        let comparator = (self.comparator_factory)(config.collation_options());

        for path in self.locations.resolve(&config.source_options()) {
            let Some(lines) = self.loader.load(&path)? else {
                log::debug!("skipping missing word list {}", path.display());
                continue;
            };

            for (index, line) in lines.enumerate() {
                let line = line?;
                if comparator.equivalent(word, &line) {
                    log::debug!(
                        "{:?} matched {:?} at {}:{}",
                        word,
                        line,
                        path.display(),
                        index + 1
                    );
                    return Ok(Some(WordMatch {
                        entry: line,
                        source: path,
                        line: index + 1,
                    }));
                }
            }
        }

        log::debug!("{word:?} matched no word list entry");
        Ok(None)
    }
}

/// Check `word` against the system word lists.
pub fn is_valid_word(word: &str, config: &VocabularyConfig) -> Result<bool> {
    WordMatcher::system().check(word, config)
}
