//! Loading and memoizing the corpus.
//!
//! A [`CorpusStore`] owns a document source and parses it the first time [`CorpusStore::load`]
//! is called. Later calls return the same shared [`Corpus`] without re-parsing.
//!
//! Concurrent first calls may each parse the document. Only one result is kept, and every
//! caller receives a fully built corpus; since parsing is deterministic the duplicate work is
//! harmless.

use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use tracing::{debug, info};

use crate::{Corpus, LoadError, structure_report};

/// Where the corpus document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// A JSON document on disk.
    Path(PathBuf),
    /// A JSON document already in memory.
    Json(Arc<str>),
    /// A corpus handed to the store already built.
    Preloaded,
}

/// Lazily loads a corpus once and shares it for the store's lifetime.
#[derive(Debug)]
pub struct CorpusStore {
    /// Document to parse on first load.
    source: CorpusSource,
    /// Reject corpora that fail structural validation.
    strict: bool,
    /// The memoized corpus.
    corpus: OnceLock<Arc<Corpus>>,
}

impl CorpusStore {
    /// Creates a store that will load from the given source.
    pub fn new(source: CorpusSource) -> Self {
        Self {
            source,
            strict: false,
            corpus: OnceLock::new(),
        }
    }

    /// Creates a store that will load the document at `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(CorpusSource::Path(path.into()))
    }

    /// Creates a store over an in-memory JSON document.
    pub fn from_json(json: impl Into<Arc<str>>) -> Self {
        Self::new(CorpusSource::Json(json.into()))
    }

    /// Creates a store that already holds a built corpus.
    pub fn preloaded(corpus: Corpus) -> Self {
        Self {
            source: CorpusSource::Preloaded,
            strict: false,
            corpus: OnceLock::from(Arc::new(corpus)),
        }
    }

    /// Enables or disables strict loading.
    ///
    /// A strict store runs [`structure_report`] after parsing and fails with
    /// [`LoadError::Invalid`] if any invariant is violated.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the configured document source.
    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// Returns true once a corpus has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.corpus.get().is_some()
    }

    /// Returns the corpus, loading it on first use.
    ///
    /// A failed load leaves the store empty, so a later call retries.
    pub fn load(&self) -> Result<Arc<Corpus>, LoadError> {
        if let Some(corpus) = self.corpus.get() {
            return Ok(Arc::clone(corpus));
        }

        let corpus = Arc::new(self.parse()?);
        if self.corpus.set(Arc::clone(&corpus)).is_err() {
            debug!("corpus was loaded concurrently, using the stored copy");
        }
        Ok(self.corpus.get().map_or(corpus, Arc::clone))
    }

    /// Parses the source and applies strict validation if enabled.
    fn parse(&self) -> Result<Corpus, LoadError> {
        let corpus = match &self.source {
            CorpusSource::Path(path) => {
                debug!(path = %path.display(), "loading corpus document");
                Corpus::from_path(path)?
            }
            CorpusSource::Json(json) => {
                debug!(bytes = json.len(), "loading in-memory corpus document");
                Corpus::from_json_str(json)?
            }
            CorpusSource::Preloaded => {
                return Err(LoadError::Structure {
                    message: "preloaded store has no document to parse".to_string(),
                });
            }
        };

        if self.strict {
            let issues = structure_report(&corpus);
            if !issues.is_empty() {
                return Err(LoadError::Invalid { issues });
            }
        }

        info!(
            chapters = corpus.chapter_count(),
            verses = corpus.verse_count(),
            version = corpus.version(),
            "corpus loaded"
        );
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, thread};

    use super::*;
    use crate::fixture;

    #[test]
    fn load_is_memoized() {
        let store = CorpusStore::from_json(fixture::small_json());
        assert!(!store.is_loaded());

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert!(store.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(&path, fixture::small_json()).unwrap();

        let store = CorpusStore::from_path(&path);
        let corpus = store.load().unwrap();
        assert_eq!(corpus.chapter_count(), 3);
        assert_eq!(store.source(), &CorpusSource::Path(path));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::from_path(dir.path().join("absent.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, LoadError::ReadFile { .. }));
        assert!(!store.is_loaded());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let store = CorpusStore::from_json("{\"chapters\": [");
        assert!(matches!(store.load(), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn failed_load_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        let store = CorpusStore::from_path(&path);
        assert!(store.load().is_err());

        fs::write(&path, fixture::small_json()).unwrap();
        assert!(store.load().is_ok());
    }

    #[test]
    fn strict_rejects_incomplete_corpus() {
        let store = CorpusStore::from_json(fixture::small_json()).strict(true);
        match store.load() {
            Err(LoadError::Invalid { issues }) => assert!(!issues.is_empty()),
            other => panic!("expected invalid corpus, got {other:?}"),
        }
    }

    #[test]
    fn strict_accepts_canonical_corpus() {
        let store = CorpusStore::from_json(fixture::canonical_json()).strict(true);
        let corpus = store.load().unwrap();
        assert_eq!(corpus.verse_count(), 6236);
    }

    #[test]
    fn preloaded_store_skips_parsing() {
        let store = CorpusStore::preloaded(fixture::small_corpus());
        assert!(store.is_loaded());
        assert_eq!(store.load().unwrap().chapter_count(), 3);
    }

    #[test]
    fn reader_and_string_agree() {
        let json = fixture::small_json();
        let from_reader = Corpus::from_reader(json.as_bytes()).unwrap();
        let from_str = Corpus::from_json_str(&json).unwrap();
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn concurrent_first_loads_converge() {
        let store = Arc::new(CorpusStore::from_json(fixture::small_json()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.load().unwrap())
            })
            .collect();
        let loaded: Vec<Arc<Corpus>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let stored = store.load().unwrap();
        for corpus in &loaded {
            assert_eq!(**corpus, *stored);
        }
    }
}
