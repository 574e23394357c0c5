//! Command line argument parsing for the sysdict CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// sysdict - query the system word lists
#[derive(Parser, Debug, Clone)]
#[command(name = "sysdict")]
#[command(about = "Build vocabularies from system word lists and check words against them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SysdictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SysdictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Options selecting the word lists to read.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON configuration file; command line flags take precedence
    #[arg(long, value_name = "CONFIG_FILE", env = "SYSDICT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Include the local user dictionary
    #[arg(long, global = true)]
    pub local: bool,

    /// Additional word list file (repeatable)
    ///
    /// Without this flag, the comma-separated SYSDICT_WORD_FILES list is used.
    #[arg(long = "file", value_name = "WORD_FILE", global = true)]
    pub files: Vec<PathBuf>,

    /// Replace the built-in default word list locations (repeatable)
    #[arg(long = "default-source", value_name = "PATH", global = true)]
    pub default_sources: Vec<PathBuf>,

    /// Replace the local dictionary locations (repeatable)
    #[arg(long = "local-dictionary", value_name = "PATH", global = true)]
    pub local_dictionaries: Vec<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the vocabulary
    List(ListArgs),

    /// Print the number of distinct words
    Count,

    /// Check whether words are valid
    Check(CheckArgs),

    /// Show the resolved word list sources
    Sources,
}

/// Arguments for listing the vocabulary
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Keep the merge order instead of sorting
    #[arg(long)]
    pub unsorted: bool,

    /// Maximum number of words to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Ignore case differences
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Ignore diacritic differences
    #[arg(short = 'd', long)]
    pub ignore_diacritics: bool,

    /// Language tag for collation rules (e.g. en, de-DE, tr)
    #[arg(long, value_name = "TAG", env = "SYSDICT_LANGUAGE")]
    pub language: Option<Language>,

    /// Report which entry matched and where
    #[arg(long)]
    pub explain: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args() {
        let args = SysdictArgs::try_parse_from([
            "sysdict",
            "--file",
            "a.txt",
            "check",
            "-i",
            "--language",
            "tr",
            "ISPARTA",
            "word",
        ])
        .unwrap();

        assert_eq!(args.sources.files, vec![PathBuf::from("a.txt")]);
        match args.command {
            Command::Check(check) => {
                assert!(check.ignore_case);
                assert!(!check.ignore_diacritics);
                assert_eq!(check.language.unwrap().as_str(), "tr");
                assert_eq!(check.words, vec!["ISPARTA", "word"]);
            }
            other => panic!("Expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_file_flag_keeps_commas() {
        let args =
            SysdictArgs::try_parse_from(["sysdict", "--file", "a,b.txt", "--file", "c", "count"])
                .unwrap();
        assert_eq!(
            args.sources.files,
            vec![PathBuf::from("a,b.txt"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            SysdictArgs::try_parse_from(["sysdict", "list", "--unsorted", "--local", "-f", "json"])
                .unwrap();

        assert!(args.sources.local);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(matches!(args.command, Command::List(ListArgs { unsorted: true, .. })));
    }

    #[test]
    fn test_invalid_language_rejected() {
        let result = SysdictArgs::try_parse_from(["sysdict", "check", "--language", "???", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_requires_a_word() {
        assert!(SysdictArgs::try_parse_from(["sysdict", "check"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = SysdictArgs::try_parse_from(["sysdict", "count"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SysdictArgs::try_parse_from(["sysdict", "-vv", "count"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SysdictArgs::try_parse_from(["sysdict", "-q", "-v", "count"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
