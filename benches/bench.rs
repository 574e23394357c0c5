use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sysdict::collation::{CollationOptions, UnicodeComparator};
use sysdict::config::VocabularyConfig;
use sysdict::loader::MemoryLineLoader;
use sysdict::matcher::WordMatcher;
use sysdict::source::SourceLocations;
use sysdict::vocabulary::{VocabularyBuilder, contains_equivalent};

const WORD_COUNT: usize = 20_000;

fn word_list() -> Vec<String> {
    (0..WORD_COUNT).map(|i| format!("Wört{i:05}")).collect()
}

fn loader() -> MemoryLineLoader {
    let mut loader = MemoryLineLoader::new();
    loader.add_words("/dict/words", word_list());
    loader
}

fn locations() -> SourceLocations {
    SourceLocations::new(["/dict/words"], Vec::<&str>::new())
}

fn bench_build(c: &mut Criterion) {
    let builder = VocabularyBuilder::new(locations(), loader());
    let config = VocabularyConfig::default();

    c.bench_function("build_set", |b| {
        b.iter(|| builder.build_set(black_box(&config)).unwrap())
    });
    c.bench_function("build_list_sorted", |b| {
        b.iter(|| builder.build_list(black_box(&config)).unwrap())
    });
}

fn bench_check(c: &mut Criterion) {
    let matcher = WordMatcher::new(locations(), loader());
    let strict = VocabularyConfig::default();
    let relaxed = VocabularyConfig::builder()
        .ignore_case(true)
        .ignore_diacritics(true)
        .build();
    let last = format!("Wört{:05}", WORD_COUNT - 1);

    c.bench_function("check_scan_last_word", |b| {
        b.iter(|| matcher.check(black_box(&last), &strict).unwrap())
    });
    c.bench_function("check_scan_relaxed_miss", |b| {
        b.iter(|| matcher.check(black_box("WORT-MISSING"), &relaxed).unwrap())
    });

    let set = VocabularyBuilder::new(locations(), loader())
        .build_set(&strict)
        .unwrap();
    let comparator = UnicodeComparator::new(CollationOptions {
        ignore_case: true,
        ignore_diacritics: true,
        ..Default::default()
    });
    c.bench_function("materialized_exact_hit", |b| {
        b.iter(|| contains_equivalent(&set, black_box(&last), &comparator))
    });
}

criterion_group!(benches, bench_build, bench_check);
criterion_main!(benches);
