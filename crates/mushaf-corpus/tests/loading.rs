//! Integration tests for loading corpus documents from disk.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, io::Cursor, path::PathBuf, sync::Arc};

use mushaf_corpus::{
    Corpus, CorpusStore, LoadError, StructureIssue, VERSE_COUNT, fixture, structure_report,
    validate_structure,
};

/// A temporary directory holding one document file.
struct DocumentDir {
    /// Keeps the directory alive for the test's duration.
    _root: tempfile::TempDir,
    /// Path of the written document.
    path: PathBuf,
}

impl DocumentDir {
    /// Writes `contents` to a fresh directory.
    fn with_contents(contents: &str) -> Self {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("mushaf.json");
        fs::write(&path, contents).unwrap();
        Self { _root: root, path }
    }
}

#[test]
fn canonical_document_loads_from_disk() {
    let dir = DocumentDir::with_contents(&fixture::canonical_json());
    let store = CorpusStore::from_path(&dir.path).strict(true);

    let corpus = store.load().unwrap();
    assert_eq!(corpus.chapter_count(), 114);
    assert_eq!(corpus.verse_count(), VERSE_COUNT);
    assert!(validate_structure(&corpus));
    assert!(store.is_loaded());

    let again = store.load().unwrap();
    assert!(Arc::ptr_eq(&corpus, &again));
}

#[test]
fn strict_store_rejects_small_document() {
    let dir = DocumentDir::with_contents(&fixture::small_json());

    let lenient = CorpusStore::from_path(&dir.path);
    assert_eq!(lenient.load().unwrap().chapter_count(), 3);

    let strict = CorpusStore::from_path(&dir.path).strict(true);
    match strict.load() {
        Err(LoadError::Invalid { issues }) => {
            assert!(issues.contains(&StructureIssue::ChapterCount { found: 3 }));
        }
        other => panic!("expected invalid corpus, got {other:?}"),
    }
    assert!(!strict.is_loaded());
}

#[test]
fn missing_file_names_the_path() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("absent.json");

    match CorpusStore::from_path(&path).load() {
        Err(LoadError::ReadFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn truncated_document_is_a_parse_error() {
    let json = fixture::small_json();
    let dir = DocumentDir::with_contents(&json[..json.len() / 2]);

    let err = CorpusStore::from_path(&dir.path).load().unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn gap_in_verse_ids_is_a_structure_error() {
    let mut document = fixture::small_document();
    document.chapters[0].verses[3].id = 9;
    let json = serde_json::to_string(&document).unwrap();
    let dir = DocumentDir::with_contents(&json);

    let err = Corpus::from_path(&dir.path).unwrap_err();
    assert!(matches!(err, LoadError::Structure { .. }), "{err}");
}

#[test]
fn report_lists_every_violation() {
    let mut document = fixture::canonical_document();
    document.chapters[0].verses[0].prostration = true;
    document.chapters[1].verses[0].juz = 31;
    let corpus = Corpus::from_document(document).unwrap();

    let issues = structure_report(&corpus);
    assert!(issues.contains(&StructureIssue::ProstrationCount { found: 16 }));
    assert!(issues.iter().any(|issue| matches!(
        issue,
        StructureIssue::JuzOutOfRange {
            chapter: 2,
            verse: 1,
            juz: 31
        }
    )));
}

#[test]
fn reader_and_pretty_output_round_trip() {
    let corpus = fixture::canonical_corpus();
    let pretty = corpus.to_json_pretty().unwrap();

    let reread = Corpus::from_reader(Cursor::new(pretty.into_bytes())).unwrap();
    assert_eq!(reread, corpus);
}
