//! Corpus model, loading and validation for mushaf.
//!
//! The corpus is a fixed text of 114 chapters and 6,236 verses, partitioned two further ways
//! into 30 Juz and 60 Hizb, with 15 verses marked for prostration. This crate:
//! - Defines the immutable [`Corpus`], [`Chapter`] and [`Verse`] entities
//! - Parses the JSON corpus document and serializes it back in the same shape
//! - Memoizes the parsed corpus in a [`CorpusStore`]
//! - Checks query arguments ([`validate`]) and corpus structure ([`structure_report`])
//!
//! # Example
//!
//! ```no_run
//! use mushaf_corpus::{CorpusStore, validate_structure};
//!
//! let store = CorpusStore::from_path("data/mushaf.json");
//! let corpus = store.load().unwrap();
//! assert!(validate_structure(&corpus));
//! println!("{} chapters", corpus.chapter_count());
//! ```

#![warn(missing_docs)]

mod document;
mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod fixture;
mod model;
mod store;
mod structure;
pub mod validate;

use std::{fs, io::Read, path::Path};

use document::check_indexable;
pub use document::{CorpusDocument, CorpusMetadata, DEFAULT_VERSION};
pub use error::{LoadError, QueryError};
pub use model::{Chapter, ChapterSummary, RevelationPeriod, Verse};
pub use store::{CorpusSource, CorpusStore};
pub use structure::{StructureIssue, juz_of_hizb, structure_report, validate_structure};

/// Number of chapters in the canonical corpus.
pub const CHAPTER_COUNT: usize = 114;

/// Number of verses in the canonical corpus.
pub const VERSE_COUNT: usize = 6236;

/// Number of Juz divisions.
pub const JUZ_COUNT: u8 = 30;

/// Number of Hizb divisions. Each Juz holds two.
pub const HIZB_COUNT: u8 = 60;

/// Number of verses marked for prostration.
pub const PROSTRATION_COUNT: usize = 15;

/// Attribution used when a document or result omits one.
pub const DEFAULT_SOURCE: &str = "Tanzil Project (tanzil.net), Uthmani text";

/// The loaded corpus: chapters in document order plus derived metadata.
///
/// Built once from a [`CorpusDocument`] and never mutated afterwards. Chapter ids are
/// guaranteed to run `1..=chapter_count()` in order, so lookups by id are direct indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    /// Format version tag.
    version: String,
    /// Source attribution.
    source: String,
    /// Chapters in document order.
    chapters: Vec<Chapter>,
    /// Values derived at load time.
    metadata: CorpusMetadata,
}

impl Corpus {
    /// Builds a corpus from a parsed document.
    ///
    /// Checks that chapters and verses can be addressed by position: chapter ids run 1..N
    /// in order, each chapter's verse list matches its declared count, and verse ids run
    /// 1..count. The remaining invariants are checked by [`structure_report`].
    pub fn from_document(document: CorpusDocument) -> Result<Self, LoadError> {
        check_indexable(&document.chapters)?;
        let metadata = CorpusMetadata::compute(&document.chapters);
        Ok(Self {
            version: document.version,
            source: document.source,
            chapters: document.chapters,
            metadata,
        })
    }

    /// Converts the corpus back into its document form.
    pub fn into_document(self) -> CorpusDocument {
        CorpusDocument {
            version: self.version,
            source: self.source,
            chapters: self.chapters,
        }
    }

    /// Parses a corpus from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: CorpusDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parses a corpus from a reader yielding JSON.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LoadError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Reads and parses the corpus document at `path`.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serializes the corpus to compact JSON in document shape.
    pub fn to_json_string(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the corpus to indented JSON in document shape.
    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the document format version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the source attribution.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns all chapters in document order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Looks up a chapter by id.
    pub fn chapter(&self, id: u16) -> Option<&Chapter> {
        let index = usize::from(id).checked_sub(1)?;
        self.chapters.get(index)
    }

    /// Looks up a verse by chapter and verse id.
    pub fn verse(&self, chapter: u16, verse: u16) -> Option<&Verse> {
        self.chapter(chapter)?.verse(verse)
    }

    /// Returns the number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns the total number of verses.
    pub fn verse_count(&self) -> usize {
        self.metadata.total_verses
    }

    /// Returns the number of chapters with the given revelation period.
    pub fn period_chapter_count(&self, period: RevelationPeriod) -> usize {
        self.metadata
            .chapters_by_period
            .get(&period)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the metadata derived at load time.
    pub fn metadata(&self) -> &CorpusMetadata {
        &self.metadata
    }

    /// Iterates over every verse with its chapter, in document order.
    pub fn verses(&self) -> impl Iterator<Item = (&Chapter, &Verse)> {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.verses.iter().map(move |verse| (chapter, verse)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_id() {
        let corpus = fixture::canonical_corpus();
        assert_eq!(corpus.chapter(1).map(|c| c.verse_count), Some(7));
        assert_eq!(corpus.chapter(114).map(|c| c.id), Some(114));
        assert!(corpus.chapter(0).is_none());
        assert!(corpus.chapter(115).is_none());
        assert_eq!(corpus.verse(2, 255).map(|v| v.id), Some(255));
        assert!(corpus.verse(1, 8).is_none());
    }

    #[test]
    fn verse_iteration_covers_corpus_in_order() {
        let corpus = fixture::canonical_corpus();
        assert_eq!(corpus.verses().count(), VERSE_COUNT);

        let first = corpus.verses().next().map(|(c, v)| (c.id, v.id));
        let last = corpus.verses().last().map(|(c, v)| (c.id, v.id));
        assert_eq!(first, Some((1, 1)));
        assert_eq!(last, Some((114, 6)));
    }

    #[test]
    fn chapter_verse_counts_sum_to_total() {
        let corpus = fixture::canonical_corpus();
        let sum: usize = corpus
            .chapters()
            .iter()
            .map(|c| usize::from(c.verse_count))
            .sum();
        assert_eq!(sum, VERSE_COUNT);
        for chapter in corpus.chapters() {
            assert_eq!(chapter.verses.len(), usize::from(chapter.verse_count));
            for (i, verse) in chapter.verses.iter().enumerate() {
                assert_eq!(usize::from(verse.id), i + 1);
            }
        }
    }

    #[test]
    fn period_counts() {
        let corpus = fixture::canonical_corpus();
        assert_eq!(corpus.period_chapter_count(RevelationPeriod::Meccan), 86);
        assert_eq!(corpus.period_chapter_count(RevelationPeriod::Medinan), 28);
    }
}
