//! Error types for the sysdict library.
//!
//! All errors are represented by the [`SysdictError`] enum. The vocabulary and
//! matching core only ever produces [`SysdictError::SourceUnreadable`]; a word
//! list that does not exist is skipped rather than reported. The remaining
//! variants belong to configuration handling and the command line tool.
//!
//! # Examples
//!
//! ```
//! use sysdict::error::{Result, SysdictError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SysdictError::config("additional word file list is malformed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for sysdict operations.
#[derive(Error, Debug)]
pub enum SysdictError {
    /// A word list exists but could not be opened or failed while being read.
    #[error("Word list {} is unreadable: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A language tag that could not be parsed.
    #[error("Invalid language tag: {0}")]
    InvalidLanguage(String),

    /// Configuration errors (malformed config files, conflicting options).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors outside of word list loading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SysdictError.
pub type Result<T> = std::result::Result<T, SysdictError>;

impl SysdictError {
    /// Create a new unreadable-source error for the given path.
    pub fn unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SysdictError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid language error.
    pub fn invalid_language<S: Into<String>>(tag: S) -> Self {
        SysdictError::InvalidLanguage(tag.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SysdictError::Config(msg.into())
    }

    /// The path of the offending word list, if this error concerns one.
    pub fn source_path(&self) -> Option<&std::path::Path> {
        match self {
            SysdictError::SourceUnreadable { path, .. } => Some(path),
            _ => None,
        }
    }
}
