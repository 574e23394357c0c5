//! # sysdict
//!
//! System word lists as an in-memory vocabulary, with locale-aware word
//! validity checks.
//!
//! ## Features
//!
//! - Merges the traditional Unix word lists, caller-supplied files and the
//!   user's local dictionary
//! - Vocabulary as a deduplicated set or a (sorted) list
//! - Validity checks with case- and diacritic-insensitive matching
//! - Pluggable line loaders and comparators
//!
//! ```no_run
//! use sysdict::config::VocabularyConfig;
//!
//! let config = VocabularyConfig::builder().ignore_case(true).build();
//! let valid = sysdict::is_valid_word("ABBA", &config)?;
//! let words = sysdict::build_vocabulary_list(&VocabularyConfig::default())?;
//! # Ok::<(), sysdict::error::SysdictError>(())
//! ```

pub mod cli;
pub mod collation;
pub mod config;
pub mod error;
pub mod language;
pub mod loader;
pub mod matcher;
pub mod source;
pub mod vocabulary;

pub use matcher::is_valid_word;
pub use vocabulary::{VocabularySet, build_vocabulary_list, build_vocabulary_set};
