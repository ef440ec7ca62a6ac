//! The serialized corpus document and the serde glue between it and [`Corpus`].
//!
//! The document is a JSON object:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "source": "Tanzil Project",
//!   "chapters": [
//!     {
//!       "id": 1, "name": "...", "transliteration": "Al-Faatiha",
//!       "revelation_period": "Meccan", "verse_count": 7, "revelation_order": 5,
//!       "verses": [{ "id": 1, "text": "...", "prostration": false, "juz": 1, "hizb": 1 }]
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Chapter, Corpus, DEFAULT_SOURCE, LoadError, RevelationPeriod};

/// Default format version for documents that omit one.
pub const DEFAULT_VERSION: &str = "1.0";

/// The corpus document exactly as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    /// Format version tag.
    #[serde(default = "default_version")]
    pub version: String,
    /// Source attribution.
    #[serde(default = "default_source")]
    pub source: String,
    /// Chapters in document order.
    pub chapters: Vec<Chapter>,
}

/// Serde default for [`CorpusDocument::version`].
fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Serde default for [`CorpusDocument::source`].
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Borrowed view of a corpus in document shape, used for serialization.
#[derive(Serialize)]
struct DocumentRef<'a> {
    /// Format version tag.
    version: &'a str,
    /// Source attribution.
    source: &'a str,
    /// Chapters in document order.
    chapters: &'a [Chapter],
}

/// Corpus-level values derived from the chapters at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorpusMetadata {
    /// Total number of verses.
    pub total_verses: usize,
    /// Number of chapters per revelation period.
    pub chapters_by_period: BTreeMap<RevelationPeriod, usize>,
}

impl CorpusMetadata {
    /// Computes the metadata from a chapter list.
    pub fn compute(chapters: &[Chapter]) -> Self {
        let mut chapters_by_period: BTreeMap<RevelationPeriod, usize> =
            RevelationPeriod::ALL.iter().map(|p| (*p, 0)).collect();
        for chapter in chapters {
            *chapters_by_period
                .entry(chapter.revelation_period)
                .or_default() += 1;
        }
        Self {
            total_verses: chapters.iter().map(|c| c.verses.len()).sum(),
            chapters_by_period,
        }
    }
}

/// Ensures chapters and verses are numbered by position.
pub fn check_indexable(chapters: &[Chapter]) -> Result<(), LoadError> {
    if chapters.is_empty() {
        return Err(LoadError::Structure {
            message: "document contains no chapters".to_string(),
        });
    }
    for (index, chapter) in chapters.iter().enumerate() {
        if usize::from(chapter.id) != index + 1 {
            return Err(LoadError::Structure {
                message: format!(
                    "chapter at position {} has id {}, expected {}",
                    index + 1,
                    chapter.id,
                    index + 1
                ),
            });
        }
        if usize::from(chapter.verse_count) != chapter.verses.len() {
            return Err(LoadError::Structure {
                message: format!(
                    "chapter {} declares {} verses but lists {}",
                    chapter.id,
                    chapter.verse_count,
                    chapter.verses.len()
                ),
            });
        }
        if let Some((position, verse)) = chapter
            .verses
            .iter()
            .enumerate()
            .find(|(i, v)| usize::from(v.id) != i + 1)
        {
            return Err(LoadError::Structure {
                message: format!(
                    "chapter {}: verse at position {} has id {}",
                    chapter.id,
                    position + 1,
                    verse.id
                ),
            });
        }
    }
    Ok(())
}

impl Serialize for Corpus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentRef {
            version: &self.version,
            source: &self.source,
            chapters: &self.chapters,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Corpus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = CorpusDocument::deserialize(deserializer)?;
        Self::from_document(document).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn metadata_counts_periods() {
        let corpus = fixture::canonical_corpus();
        let meta = corpus.metadata();
        assert_eq!(meta.total_verses, 6236);
        assert_eq!(meta.chapters_by_period[&RevelationPeriod::Meccan], 86);
        assert_eq!(meta.chapters_by_period[&RevelationPeriod::Medinan], 28);
    }

    #[test]
    fn source_and_version_default_when_absent() {
        let json = r#"{"chapters":[{"id":1,"name":"a","transliteration":"A",
            "revelation_period":"Meccan","verse_count":1,"revelation_order":1,
            "verses":[{"id":1,"text":"x","juz":1,"hizb":1}]}]}"#;
        let corpus = Corpus::from_json_str(json).unwrap();
        assert_eq!(corpus.source(), DEFAULT_SOURCE);
        assert_eq!(corpus.version(), DEFAULT_VERSION);
    }

    #[test]
    fn rejects_chapter_gap() {
        let mut doc = fixture::small_document();
        doc.chapters[1].id = 5;
        let err = Corpus::from_document(doc).unwrap_err();
        assert!(matches!(err, LoadError::Structure { .. }));
        assert!(err.to_string().contains("has id 5, expected 2"));
    }

    #[test]
    fn rejects_verse_count_mismatch() {
        let mut doc = fixture::small_document();
        doc.chapters[0].verses.pop();
        let err = Corpus::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("declares 7 verses but lists 6"));
    }

    #[test]
    fn rejects_misnumbered_verse() {
        let mut doc = fixture::small_document();
        doc.chapters[1].verses[3].id = 9;
        let err = Corpus::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("verse at position 4 has id 9"));
    }

    #[test]
    fn rejects_empty_document() {
        let err = Corpus::from_json_str(r#"{"chapters":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Structure { .. }));
    }

    #[test]
    fn rejects_unknown_revelation_period() {
        let json = r#"{"chapters":[{"id":1,"name":"a","transliteration":"A",
            "revelation_period":"Other","verse_count":0,"revelation_order":1,"verses":[]}]}"#;
        let err = Corpus::from_json_str(json).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn serialization_round_trips() {
        let corpus = fixture::canonical_corpus();
        let first = corpus.to_json_string().unwrap();
        let reparsed = Corpus::from_json_str(&first).unwrap();
        let second = reparsed.to_json_string().unwrap();
        assert_eq!(first, second);
        assert_eq!(reparsed, corpus);
    }

    #[test]
    fn serde_deserialize_matches_from_document() {
        let json = fixture::small_json();
        let via_serde: Corpus = serde_json::from_str(&json).unwrap();
        let via_document = Corpus::from_json_str(&json).unwrap();
        assert_eq!(via_serde, via_document);
    }
}
