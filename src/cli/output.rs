//! Output formatting for CLI commands.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SysdictArgs};
use crate::error::Result;
use crate::matcher::WordMatch;

/// Result structure for the list command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub words: Vec<String>,
    pub total_words: usize,
    pub sorted: bool,
}

/// Result structure for the count command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub total_words: usize,
}

/// Outcome of checking one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<WordMatch>,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub results: Vec<WordCheck>,
    pub all_valid: bool,
}

/// A resolved source and whether it is present on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceStatus {
    pub path: PathBuf,
    pub exists: bool,
}

/// Result structure for the sources command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourcesResult {
    pub sources: Vec<SourceStatus>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()>;
}

impl HumanOutput for ListResult {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        if verbosity > 1 {
            writeln!(out)?;
            writeln!(out, "Total words: {}", self.total_words)?;
        }
        Ok(())
    }
}

impl HumanOutput for CountResult {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> io::Result<()> {
        writeln!(out, "{}", self.total_words)
    }
}

impl HumanOutput for CheckResults {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for check in &self.results {
            if verbosity == 0 {
                continue;
            }
            let status = if check.valid { "valid" } else { "invalid" };
            match &check.matched {
                Some(found) => writeln!(
                    out,
                    "{}: {} (matched {:?} at {}:{})",
                    check.word,
                    status,
                    found.entry,
                    found.source.display(),
                    found.line
                )?,
                None => writeln!(out, "{}: {}", check.word, status)?,
            }
        }
        Ok(())
    }
}

impl HumanOutput for SourcesResult {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> io::Result<()> {
        for source in &self.sources {
            let state = if source.exists { "present" } else { "missing" };
            writeln!(out, "{:<8} {}", state, source.path.display())?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &SysdictArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args)
}

/// Write a result to `out` in the specified format.
pub fn write_result<T>(out: &mut dyn Write, result: &T, args: &SysdictArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity())?,
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
