//! Word list source resolution.
//!
//! Sources come in three tiers, always concatenated in this order:
//!
//! 1. the system default word lists,
//! 2. caller-supplied additional files,
//! 3. the user's local dictionaries, only when enabled.
//!
//! Resolution performs no I/O. Whether a path exists is decided later, when
//! the [`LineLoader`](crate::loader::LineLoader) opens it.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::SourceOptions;

/// Traditional Unix word list locations, in lookup order.
pub const SYSTEM_WORD_FILES: &[&str] = &["/usr/share/dict/words", "/usr/dict/words"];

/// Per-user spelling dictionary locations.
pub const LOCAL_DICTIONARY_FILES: &[&str] = &["~/Library/Spelling/LocalDictionary"];

/// The default and local dictionary tables used to resolve sources.
///
/// Tests and embedding applications construct their own value instead of
/// touching the system tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocations {
    /// Built-in default word lists, highest priority.
    pub defaults: Vec<PathBuf>,
    /// User dictionaries, consulted last and only when enabled.
    pub local_dictionaries: Vec<PathBuf>,
}

impl SourceLocations {
    /// Create a table from explicit locations.
    pub fn new<D, L, P, Q>(defaults: D, local_dictionaries: L) -> Self
    where
        D: IntoIterator<Item = P>,
        L: IntoIterator<Item = Q>,
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        SourceLocations {
            defaults: defaults.into_iter().map(Into::into).collect(),
            local_dictionaries: local_dictionaries.into_iter().map(Into::into).collect(),
        }
    }

    /// The platform's traditional word list locations.
    pub fn system() -> Self {
        SourceLocations::new(SYSTEM_WORD_FILES, LOCAL_DICTIONARY_FILES)
    }

    /// A table without any built-in sources.
    pub fn empty() -> Self {
        SourceLocations {
            defaults: Vec::new(),
            local_dictionaries: Vec::new(),
        }
    }

    /// Produce the ordered source list for the given options.
    pub fn resolve(&self, options: &SourceOptions) -> Vec<PathBuf> {
        let home = home_dir();
        let local: &[PathBuf] = if options.include_local_dictionary {
            &self.local_dictionaries
        } else {
            &[]
        };

        let sources: Vec<PathBuf> = self
            .defaults
            .iter()
            .chain(&options.additional_word_files)
            .chain(local)
            .map(|path| expand_home(path, home.as_deref()))
            .collect();

        log::trace!("resolved {} word list sources: {:?}", sources.len(), sources);
        sources
    }
}

impl Default for SourceLocations {
    fn default() -> Self {
        SourceLocations::system()
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Expand a leading `~` component against `home`. Paths are returned
/// unchanged when there is nothing to expand or no home directory.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
