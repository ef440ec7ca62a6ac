//! Whole-corpus properties checked against the canonical fixture.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::collections::HashSet;

use mushaf_corpus::{
    CHAPTER_COUNT, Corpus, CorpusStore, HIZB_COUNT, JUZ_COUNT, PROSTRATION_COUNT, VERSE_COUNT,
    fixture, validate_structure,
};
use mushaf_query::{QueryEngine, RandomMode, SearchResult, StatisticsResult};
use rand::{SeedableRng, rngs::StdRng};

fn engine() -> QueryEngine {
    QueryEngine::new(fixture::canonical_corpus())
}

#[test]
fn every_chapter_holds_its_declared_verses() {
    let engine = engine();
    let mut total = 0;
    for id in 1..=CHAPTER_COUNT as u16 {
        let chapter = engine.chapter(id).unwrap();
        assert_eq!(chapter.verses.len(), usize::from(chapter.verse_count));
        for (index, verse) in chapter.verses.iter().enumerate() {
            assert_eq!(usize::from(verse.id), index + 1);
        }
        total += usize::from(chapter.verse_count);
    }
    assert_eq!(total, VERSE_COUNT);
}

#[test]
fn juz_listings_partition_the_corpus() {
    let engine = engine();
    let mut seen = HashSet::new();
    for juz in 1..=JUZ_COUNT {
        let result = engine.juz(juz).unwrap();
        assert!(!result.is_empty(), "juz {juz} is empty");
        for verse in &result.verses {
            assert_eq!(verse.verse.juz, juz);
            assert!(seen.insert(verse.reference()), "{} listed twice", verse.reference());
        }
    }
    assert_eq!(seen.len(), VERSE_COUNT);
}

#[test]
fn hizb_listings_report_their_juz() {
    let engine = engine();
    let mut total = 0;
    for hizb in 1..=HIZB_COUNT {
        let result = engine.hizb(hizb).unwrap();
        assert_eq!(result.query.juz, (hizb - 1) / 2 + 1);
        assert!(result.verses.iter().all(|v| v.verse.juz == result.query.juz));
        total += result.total_results;
    }
    assert_eq!(total, VERSE_COUNT);
}

#[test]
fn exactly_fifteen_prostrations() {
    let result = engine().prostration_verses();
    assert_eq!(result.total_results, PROSTRATION_COUNT);
    assert!(result.has_prostration());
    assert_eq!(result.verses.last().map(|v| v.reference()).as_deref(), Some("96:19"));
}

#[test]
fn scenario_first_chapter() {
    let engine = engine();
    let chapter = engine.chapter(1).unwrap();
    assert_eq!(chapter.verse_count, 7);
    assert_eq!(chapter.transliteration.as_ref(), "Al-Faatiha");

    let range = engine.verse_range(1, 1, 7).unwrap();
    assert_eq!(range.query.range.count, 7);
    assert_eq!(range.query.chapter.transliteration.as_ref(), "Al-Faatiha");
    assert!(engine.verse_range(1, 5, 3).unwrap_err().is_invalid_argument());
}

#[test]
fn scenario_search() {
    let engine = engine();
    assert!(engine.search_text("").unwrap_err().is_invalid_argument());
    let marker = fixture::verse_marker(36, 58);
    assert_eq!(engine.search_text(&marker).unwrap().total_results, 1);
}

#[test]
fn scenario_statistics() {
    let stats = engine().statistics().unwrap();
    assert_eq!(stats.total_chapters, CHAPTER_COUNT);
    assert_eq!(stats.total_verses, VERSE_COUNT);
    assert_eq!(stats.longest_chapter.verse_count, 286);
    assert_eq!(stats.shortest_chapter.verse_count, 3);
}

#[test]
fn corpus_round_trips_byte_for_byte() {
    let corpus = fixture::canonical_corpus();
    let json = corpus.to_json_string().unwrap();
    let reparsed = Corpus::from_json_str(&json).unwrap();
    assert_eq!(reparsed, corpus);
    assert_eq!(reparsed.to_json_string().unwrap(), json);
    assert!(validate_structure(&reparsed));
}

#[test]
fn results_round_trip() {
    let engine = engine();
    let search = engine.search_text("(2:1").unwrap();
    let json = serde_json::to_string(&search).unwrap();
    let reparsed: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, search);

    let stats = engine.statistics().unwrap();
    let json = serde_json::to_string(&stats).unwrap();
    let reparsed: StatisticsResult = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, stats);
}

#[test]
fn repeated_loads_return_the_same_corpus() {
    let store = CorpusStore::from_json(fixture::canonical_json());
    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);

    let fresh = CorpusStore::from_json(fixture::canonical_json()).load().unwrap();
    assert_eq!(*fresh, *first);
}

#[test]
fn seeded_random_verses_repeat() {
    for mode in [RandomMode::ChapterWeighted, RandomMode::Uniform] {
        let engine = engine().with_random_mode(mode);
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            assert_eq!(
                engine.random_verse_with(&mut a).unwrap(),
                engine.random_verse_with(&mut b).unwrap()
            );
        }
    }
}
