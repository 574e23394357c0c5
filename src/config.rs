//! Configuration for vocabulary building and word validity checks.
//!
//! A single immutable [`VocabularyConfig`] describes every operation. Each
//! operation only reads the fields that concern it:
//!
//! | field                      | set | list | check |
//! |----------------------------|-----|------|-------|
//! | `include_local_dictionary` | yes | yes  | yes   |
//! | `additional_word_files`    | yes | yes  | yes   |
//! | `ignore_sort`              |     | yes  |       |
//! | `ignore_case`              |     |      | yes   |
//! | `ignore_diacritics`        |     |      | yes   |
//! | `language`                 |     |      | yes   |
//!
//! # Example
//!
//! ```
//! use sysdict::config::VocabularyConfig;
//!
//! let config = VocabularyConfig::builder()
//!     .include_local_dictionary(true)
//!     .additional_word_file("/opt/project/jargon.txt")
//!     .ignore_case(true)
//!     .build();
//!
//! assert!(config.source_options().include_local_dictionary);
//! assert!(config.collation_options().ignore_case);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collation::CollationOptions;
use crate::error::{Result, SysdictError};
use crate::language::Language;

/// Options shared by every operation: which word lists to read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Include the user's local dictionary after all other sources.
    pub include_local_dictionary: bool,

    /// Extra word list files, consulted after the system defaults.
    pub additional_word_files: Vec<PathBuf>,
}

/// Configuration for building vocabularies and checking words.
///
/// Defaults: local dictionary excluded, no additional files, sorting enabled,
/// case-sensitive, diacritic-sensitive, English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Include the user's local dictionary.
    pub include_local_dictionary: bool,

    /// Extra word list files to merge in.
    pub additional_word_files: Vec<PathBuf>,

    /// Keep set iteration order instead of sorting (list form only).
    pub ignore_sort: bool,

    /// Treat words differing only in case as equivalent (checks only).
    pub ignore_case: bool,

    /// Treat words differing only in diacritics as equivalent (checks only).
    pub ignore_diacritics: bool,

    /// Language whose collation rules apply (checks only).
    pub language: Language,
}

impl VocabularyConfig {
    /// Create a new builder for VocabularyConfig.
    pub fn builder() -> VocabularyConfigBuilder {
        VocabularyConfigBuilder::new()
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SysdictError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The sub-configuration that selects word lists.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            include_local_dictionary: self.include_local_dictionary,
            additional_word_files: self.additional_word_files.clone(),
        }
    }

    /// The sub-configuration of the equivalence comparator.
    pub fn collation_options(&self) -> CollationOptions {
        CollationOptions {
            language: self.language.clone(),
            ignore_case: self.ignore_case,
            ignore_diacritics: self.ignore_diacritics,
        }
    }
}

/// Builder for VocabularyConfig.
#[derive(Debug, Clone, Default)]
pub struct VocabularyConfigBuilder {
    config: VocabularyConfig,
}

impl VocabularyConfigBuilder {
    /// Create a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_local_dictionary(mut self, include: bool) -> Self {
        self.config.include_local_dictionary = include;
        self
    }

    /// Append one additional word file.
    pub fn additional_word_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.additional_word_files.push(path.into());
        self
    }

    /// Append several additional word files, preserving their order.
    pub fn additional_word_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config
            .additional_word_files
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn ignore_sort(mut self, ignore: bool) -> Self {
        self.config.ignore_sort = ignore;
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.config.ignore_case = ignore;
        self
    }

    pub fn ignore_diacritics(mut self, ignore: bool) -> Self {
        self.config.ignore_diacritics = ignore;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VocabularyConfig {
        self.config
    }
}
