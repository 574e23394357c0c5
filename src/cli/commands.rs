//! Command implementations for the sysdict CLI.

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::VocabularyConfig;
use crate::loader::FsLineLoader;
use crate::matcher::WordMatcher;
use crate::source::SourceLocations;
use crate::vocabulary::VocabularyBuilder;

/// Process exit status of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// `check` found at least one invalid word.
    InvalidWords,
}

impl CommandStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::InvalidWords => 1,
        }
    }
}

/// Execute a CLI command.
pub fn execute_command(args: SysdictArgs) -> anyhow::Result<CommandStatus> {
    let config = load_config(&args)?;
    let locations = source_locations(&args.sources);
    log::debug!("effective configuration: {config:?}");

    match &args.command {
        Command::List(list_args) => list_words(list_args, config, locations, &args),
        Command::Count => count_words(config, locations, &args),
        Command::Check(check_args) => check_words(check_args, config, locations, &args),
        Command::Sources => show_sources(config, locations, &args),
    }
}

/// Environment variable with a comma-separated list of additional word files.
pub const WORD_FILES_ENV: &str = "SYSDICT_WORD_FILES";

/// Split a comma-separated word file list. Empty entries are skipped.
pub fn split_word_files(list: &str) -> Vec<PathBuf> {
    list.split(',')
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Combine the optional configuration file with command line flags.
pub fn load_config(args: &SysdictArgs) -> anyhow::Result<VocabularyConfig> {
    let mut config = match &args.sources.config {
        Some(path) => VocabularyConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => VocabularyConfig::default(),
    };

    config.include_local_dictionary |= args.sources.local;
    if args.sources.files.is_empty() {
        if let Ok(list) = std::env::var(WORD_FILES_ENV) {
            config.additional_word_files.extend(split_word_files(&list));
        }
    } else {
        config
            .additional_word_files
            .extend(args.sources.files.iter().cloned());
    }

    match &args.command {
        Command::List(list_args) => config.ignore_sort |= list_args.unsorted,
        Command::Check(check_args) => {
            config.ignore_case |= check_args.ignore_case;
            config.ignore_diacritics |= check_args.ignore_diacritics;
            if let Some(language) = &check_args.language {
                config.language = language.clone();
            }
        }
        Command::Count | Command::Sources => {}
    }

    Ok(config)
}

/// The source table, with command line replacements applied.
pub fn source_locations(args: &SourceArgs) -> SourceLocations {
    let mut locations = SourceLocations::system();
    if !args.default_sources.is_empty() {
        locations.defaults = args.default_sources.clone();
    }
    if !args.local_dictionaries.is_empty() {
        locations.local_dictionaries = args.local_dictionaries.clone();
    }
    locations
}

fn list_words(
    list_args: &ListArgs,
    config: VocabularyConfig,
    locations: SourceLocations,
    cli_args: &SysdictArgs,
) -> anyhow::Result<CommandStatus> {
    let builder = VocabularyBuilder::new(locations, FsLineLoader::new());
    let mut words = builder
        .build_list(&config)
        .context("Failed to build vocabulary")?;

    let total_words = words.len();
    if let Some(limit) = list_args.limit {
        words.truncate(limit);
    }

    output_result(
        &ListResult {
            words,
            total_words,
            sorted: !config.ignore_sort,
        },
        cli_args,
    )?;
    Ok(CommandStatus::Success)
}

fn count_words(
    config: VocabularyConfig,
    locations: SourceLocations,
    cli_args: &SysdictArgs,
) -> anyhow::Result<CommandStatus> {
    let builder = VocabularyBuilder::new(locations, FsLineLoader::new());
    let words = builder
        .build_set(&config)
        .context("Failed to build vocabulary")?;

    output_result(
        &CountResult {
            total_words: words.len(),
        },
        cli_args,
    )?;
    Ok(CommandStatus::Success)
}

fn check_words(
    check_args: &CheckArgs,
    config: VocabularyConfig,
    locations: SourceLocations,
    cli_args: &SysdictArgs,
) -> anyhow::Result<CommandStatus> {
    let matcher = WordMatcher::new(locations, FsLineLoader::new());

    let mut results = Vec::with_capacity(check_args.words.len());
    for word in &check_args.words {
        let found = matcher
            .find(word, &config)
            .with_context(|| format!("Failed to check {word:?}"))?;
        results.push(WordCheck {
            word: word.clone(),
            valid: found.is_some(),
            matched: found.filter(|_| check_args.explain),
        });
    }

    let all_valid = results.iter().all(|check| check.valid);
    output_result(&CheckResults { results, all_valid }, cli_args)?;

    Ok(if all_valid {
        CommandStatus::Success
    } else {
        CommandStatus::InvalidWords
    })
}

fn show_sources(
    config: VocabularyConfig,
    locations: SourceLocations,
    cli_args: &SysdictArgs,
) -> anyhow::Result<CommandStatus> {
    let sources = locations
        .resolve(&config.source_options())
        .into_iter()
        .map(|path| SourceStatus {
            exists: path.exists(),
            path,
        })
        .collect();

    output_result(&SourcesResult { sources }, cli_args)?;
    Ok(CommandStatus::Success)
}
