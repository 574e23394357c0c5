//! Vocabulary building from word list sources.
//!
//! Every resolvable source is read in full and each line is inserted verbatim
//! into a [`VocabularySet`]. Missing sources are skipped. The first unreadable
//! source aborts the build and the partial set is dropped.
//!
//! # Examples
//!
//! ```
//! use sysdict::config::VocabularyConfig;
//! use sysdict::loader::MemoryLineLoader;
//! use sysdict::source::SourceLocations;
//! use sysdict::vocabulary::VocabularyBuilder;
//!
//! let mut loader = MemoryLineLoader::new();
//! loader.add_words("/dict/words", ["pear", "apple"]);
//! loader.add_words("/dict/extra", ["fig", "apple"]);
//!
//! let builder = VocabularyBuilder::new(SourceLocations::new(["/dict/words"], Vec::<&str>::new()), loader);
//! let config = VocabularyConfig::builder().additional_word_file("/dict/extra").build();
//!
//! assert_eq!(builder.build_list(&config).unwrap(), vec!["apple", "fig", "pear"]);
//! ```

use ahash::AHashSet;

use crate::collation::Comparator;
use crate::config::{SourceOptions, VocabularyConfig};
use crate::error::Result;
use crate::loader::{FsLineLoader, LineLoader};
use crate::source::SourceLocations;

/// The deduplicated words of every resolvable source.
pub type VocabularySet = AHashSet<String>;

/// Builds vocabularies from a source table through a line loader.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder<L> {
    locations: SourceLocations,
    loader: L,
}

impl VocabularyBuilder<FsLineLoader> {
    /// A builder over the system word lists on the local filesystem.
    pub fn system() -> Self {
        VocabularyBuilder::new(SourceLocations::system(), FsLineLoader::new())
    }
}

impl<L: LineLoader> VocabularyBuilder<L> {
    /// Create a builder from a source table and a loader.
    pub fn new(locations: SourceLocations, loader: L) -> Self {
        VocabularyBuilder { locations, loader }
    }

    /// The source table this builder resolves against.
    pub fn locations(&self) -> &SourceLocations {
        &self.locations
    }

    /// Build the vocabulary set. Only the source selection of `config` is used.
    pub fn build_set(&self, config: &VocabularyConfig) -> Result<VocabularySet> {
        self.build_set_from(&config.source_options())
    }

    /// Build the vocabulary set for an explicit source selection.
    pub fn build_set_from(&self, options: &SourceOptions) -> Result<VocabularySet> {
        let mut words = VocabularySet::new();

        for path in self.locations.resolve(options) {
            let Some(lines) = self.loader.load(&path)? else {
                log::debug!("skipping missing word list {}", path.display());
                continue;
            };

            let before = words.len();
            let mut read = 0usize;
            for line in lines {
                words.insert(line?);
                read += 1;
            }
            log::debug!(
                "loaded {} lines ({} new words) from {}",
                read,
                words.len() - before,
                path.display()
            );
        }

        Ok(words)
    }

    /// Build the vocabulary as a list, sorted by code point unless
    /// `config.ignore_sort` is set.
    pub fn build_list(&self, config: &VocabularyConfig) -> Result<Vec<String>> {
        let words = self.build_set_from(&config.source_options())?;
        let mut list: Vec<String> = words.into_iter().collect();

        if !config.ignore_sort {
            list.sort_unstable();
        }

        Ok(list)
    }
}

/// Report whether `set` holds a word equivalent to `word` under `comparator`.
///
/// This is the manual equivalence pass over a materialized vocabulary. An
/// exact hit is answered by hashing; anything else is a linear scan.
pub fn contains_equivalent<C: Comparator + ?Sized>(
    set: &VocabularySet,
    word: &str,
    comparator: &C,
) -> bool {
    set.contains(word) || set.iter().any(|entry| comparator.equivalent(word, entry))
}

/// Build the vocabulary set from the system word lists.
pub fn build_vocabulary_set(config: &VocabularyConfig) -> Result<VocabularySet> {
    VocabularyBuilder::system().build_set(config)
}

/// Build the vocabulary list from the system word lists.
pub fn build_vocabulary_list(config: &VocabularyConfig) -> Result<Vec<String>> {
    VocabularyBuilder::system().build_list(config)
}
