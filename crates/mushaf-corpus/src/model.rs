//! Chapter and verse entities.
//!
//! All entities are immutable once built. Text fields are reference counted so that query
//! results can hold verses without copying their text.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// The two revelation-period classifications a chapter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevelationPeriod {
    /// Revealed before the migration.
    #[serde(alias = "meccan", alias = "Makki", alias = "makki")]
    Meccan,
    /// Revealed after the migration.
    #[serde(alias = "medinan", alias = "Madani", alias = "madani")]
    Medinan,
}

impl RevelationPeriod {
    /// Every classification, in display order.
    pub const ALL: [Self; 2] = [Self::Meccan, Self::Medinan];

    /// Returns the canonical label used in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meccan => "Meccan",
            Self::Medinan => "Medinan",
        }
    }
}

impl fmt::Display for RevelationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single verse, addressed by its 1-based position within its chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Position within the owning chapter, starting at 1.
    pub id: u16,
    /// Verse text in the original script.
    pub text: Arc<str>,
    /// Whether this verse carries the prostration marker.
    #[serde(default, alias = "sajda")]
    pub prostration: bool,
    /// Juz this verse belongs to (1-30).
    pub juz: u8,
    /// Hizb this verse belongs to (1-60).
    pub hizb: u8,
}

/// A chapter with its ordered verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Position in canonical document order (1-114).
    pub id: u16,
    /// Name in the original script.
    pub name: Arc<str>,
    /// Latin-script display name.
    #[serde(alias = "name_latin")]
    pub transliteration: Arc<str>,
    /// Revelation-period classification.
    #[serde(alias = "type")]
    pub revelation_period: RevelationPeriod,
    /// Declared number of verses.
    pub verse_count: u16,
    /// Rank in chronological revelation order (1-114).
    pub revelation_order: u16,
    /// Verses in order, `verses[i].id == i + 1`.
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Looks up a verse by its 1-based id.
    pub fn verse(&self, id: u16) -> Option<&Verse> {
        let index = usize::from(id).checked_sub(1)?;
        self.verses.get(index).filter(|v| v.id == id)
    }

    /// Returns the verses with ids in `start..=end`.
    ///
    /// Returns an empty slice when the range falls outside the chapter.
    pub fn verse_slice(&self, start: u16, end: u16) -> &[Verse] {
        let (Some(from), Some(to)) = (
            usize::from(start).checked_sub(1),
            usize::from(end).checked_sub(1),
        ) else {
            return &[];
        };
        self.verses.get(from..=to).unwrap_or(&[])
    }

    /// Returns the chapter's identity and descriptive fields, without its verses.
    pub fn summary(&self) -> ChapterSummary {
        ChapterSummary {
            id: self.id,
            name: Arc::clone(&self.name),
            transliteration: Arc::clone(&self.transliteration),
            revelation_period: self.revelation_period,
            verse_count: self.verse_count,
            revelation_order: self.revelation_order,
        }
    }
}

/// A chapter's identity and descriptive fields, detached from its verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    /// Position in canonical document order.
    pub id: u16,
    /// Name in the original script.
    pub name: Arc<str>,
    /// Latin-script display name.
    pub transliteration: Arc<str>,
    /// Revelation-period classification.
    pub revelation_period: RevelationPeriod,
    /// Number of verses in the chapter.
    pub verse_count: u16,
    /// Rank in chronological revelation order.
    pub revelation_order: u16,
}
