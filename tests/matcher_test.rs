use std::fs;
use std::path::PathBuf;

use sysdict::config::VocabularyConfig;
use sysdict::error::SysdictError;
use sysdict::language::Language;
use sysdict::loader::FsLineLoader;
use sysdict::matcher::WordMatcher;
use sysdict::source::SourceLocations;
use tempfile::{TempDir, tempdir};

fn fixture(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempdir().unwrap();
    let paths = files
        .iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            path
        })
        .collect();
    (dir, paths)
}

fn matcher(defaults: &[PathBuf], local: &[PathBuf]) -> WordMatcher<FsLineLoader> {
    WordMatcher::new(
        SourceLocations::new(defaults.to_vec(), local.to_vec()),
        FsLineLoader::new(),
    )
}

#[test]
fn test_valid_and_invalid_words() {
    let (_dir, paths) = fixture(&[("dictionary1", "aardvark\nAbba\nzebra\n")]);
    let matcher = matcher(&paths, &[]);
    let config = VocabularyConfig::default();

    assert!(matcher.check("Abba", &config).unwrap());
    assert!(!matcher.check("jhdsoagnbeiv", &config).unwrap());
}

#[test]
fn test_case_sensitivity() {
    let (_dir, paths) = fixture(&[("dictionary1", "Abba\n")]);
    let matcher = matcher(&paths, &[]);

    let ignore_case = VocabularyConfig::builder().ignore_case(true).build();
    assert!(matcher.check("ABBA", &ignore_case).unwrap());
    assert!(!matcher.check("ABBA", &VocabularyConfig::default()).unwrap());
}

#[test]
fn test_diacritic_sensitivity() {
    let (_dir, paths) = fixture(&[("dictionary1", "Abba\n")]);
    let matcher = matcher(&paths, &[]);

    let ignore_diacritics = VocabularyConfig::builder().ignore_diacritics(true).build();
    assert!(matcher.check("Äbba", &ignore_diacritics).unwrap());
    assert!(!matcher.check("Äbba", &VocabularyConfig::default()).unwrap());
}

#[test]
fn test_crlf_word_lists() {
    let (_dir, paths) = fixture(&[("dictionary1", "Abba\r\nzebra\r\n")]);
    let matcher = matcher(&paths, &[]);

    assert!(matcher.check("zebra", &VocabularyConfig::default()).unwrap());
}

#[test]
fn test_word_from_local_dictionary() {
    let (_dir, paths) = fixture(&[("dictionary1", "a\n"), ("customWords", "Grüße\n")]);
    let matcher = matcher(&paths[..1], &paths[1..]);

    let config = VocabularyConfig::builder()
        .include_local_dictionary(true)
        .ignore_case(true)
        .language(Language::parse("de").unwrap())
        .build();
    let found = matcher.find("GRÜSSE", &config).unwrap().unwrap();
    assert_eq!(found.entry, "Grüße");
    assert_eq!(found.source, paths[1]);

    assert!(!matcher.check("GRÜSSE", &VocabularyConfig::default()).unwrap());
}

#[test]
fn test_missing_additional_file_is_skipped() {
    let (dir, paths) = fixture(&[("dictionary1", "a\n"), ("additionalWordFile", "extra\n")]);
    let matcher = matcher(&paths[..1], &[]);

    let config = VocabularyConfig::builder()
        .additional_word_file(dir.path().join("doesNotExist"))
        .additional_word_file(&paths[1])
        .build();
    assert!(matcher.check("extra", &config).unwrap());
}

#[test]
fn test_unreadable_source_is_an_error() {
    let (dir, paths) = fixture(&[("dictionary1", "a\n")]);
    let matcher = matcher(&paths, &[]);

    let config = VocabularyConfig::builder()
        .additional_word_file(dir.path())
        .build();

    assert!(matcher.check("a", &config).unwrap());
    assert!(matches!(
        matcher.check("b", &config),
        Err(SysdictError::SourceUnreadable { .. })
    ));
}
