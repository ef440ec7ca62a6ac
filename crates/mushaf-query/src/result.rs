//! Result types returned by the query engine.
//!
//! Verse-returning queries share one container, [`VerseListing`], parameterized by the query
//! that produced it; chapter-returning queries use [`ChapterListing`]. Both serialize to a
//! flat object holding the query parameters, the result count, the ordered payload and the
//! source attribution.
//!
//! Grouping and frequency accessors are computed on every call and never cached.

use std::collections::{BTreeMap, BTreeSet};

use mushaf_corpus::{Chapter, ChapterSummary, DEFAULT_SOURCE, RevelationPeriod, Verse};
use serde::{Deserialize, Serialize};

use crate::grouping::{PeriodBreakdown, group_by, most_frequent};

/// Serde default for result attribution.
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// A verse joined with its chapter's identity and descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseWithChapter {
    /// The owning chapter.
    pub chapter: ChapterSummary,
    /// The verse itself.
    #[serde(flatten)]
    pub verse: Verse,
}

impl VerseWithChapter {
    /// Joins a verse with its chapter.
    pub fn new(chapter: &Chapter, verse: &Verse) -> Self {
        Self {
            chapter: chapter.summary(),
            verse: verse.clone(),
        }
    }

    /// Returns the `chapter:verse` reference, e.g. `2:255`.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.chapter.id, self.verse.id)
    }
}

/// Parameters of a verse-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuery {
    /// The search term, exactly as given.
    pub term: String,
}

/// Parameters of a prostration-verse listing. There are none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProstrationQuery {}

/// A span of consecutive verses within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSpan {
    /// First verse id.
    pub start: u16,
    /// Last verse id, inclusive.
    pub end: u16,
    /// Number of verses, `end - start + 1`, or 0 when `start > end`.
    pub count: u16,
}

impl VerseSpan {
    /// Builds a span from its bounds. A reversed span is empty.
    pub fn new(start: u16, end: u16) -> Self {
        let count = end
            .checked_sub(start)
            .map_or(0, |gap| gap.saturating_add(1));
        Self { start, end, count }
    }
}

/// Parameters of a verse-range extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    /// The chapter the range lies in.
    pub chapter: ChapterSummary,
    /// The requested verses.
    pub range: VerseSpan,
}

/// Parameters of a Juz listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuzQuery {
    /// Juz number (1-30).
    pub juz: u8,
}

/// Parameters of a Hizb listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HizbQuery {
    /// Hizb number (1-60).
    pub hizb: u8,
    /// The Juz containing this Hizb.
    pub juz: u8,
}

/// Parameters of a chapter-name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameQuery {
    /// The search term, exactly as given.
    pub term: String,
}

/// An ordered list of verses produced by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseListing<Q> {
    /// The query parameters that produced this listing.
    #[serde(flatten)]
    pub query: Q,
    /// Number of verses returned.
    pub total_results: usize,
    /// Matching verses in corpus order.
    pub verses: Vec<VerseWithChapter>,
    /// Source attribution of the corpus text.
    #[serde(default = "default_source")]
    pub source: String,
}

/// Verses containing a search term.
pub type SearchResult = VerseListing<TextQuery>;

/// Every verse marked for prostration.
pub type ProstrationResult = VerseListing<ProstrationQuery>;

/// Consecutive verses of one chapter.
pub type RangeResult = VerseListing<RangeQuery>;

/// The verses of one Juz.
pub type JuzResult = VerseListing<JuzQuery>;

/// The verses of one Hizb.
pub type HizbResult = VerseListing<HizbQuery>;

impl<Q> VerseListing<Q> {
    /// Wraps an ordered verse list with its query and attribution.
    pub fn new(query: Q, verses: Vec<VerseWithChapter>, source: &str) -> Self {
        Self {
            query,
            total_results: verses.len(),
            verses,
            source: source.to_string(),
        }
    }

    /// Returns the number of verses.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Returns true if no verse matched.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Returns the distinct chapter ids, in order of first appearance.
    pub fn chapter_ids(&self) -> Vec<u16> {
        let mut seen = BTreeSet::new();
        self.verses
            .iter()
            .map(|v| v.chapter.id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Groups the verses by chapter id.
    pub fn by_chapter(&self) -> BTreeMap<u16, Vec<&VerseWithChapter>> {
        group_by(&self.verses, |v| v.chapter.id)
    }

    /// Groups the verses by Juz.
    pub fn by_juz(&self) -> BTreeMap<u8, Vec<&VerseWithChapter>> {
        group_by(&self.verses, |v| v.verse.juz)
    }

    /// Groups the verses by Hizb.
    pub fn by_hizb(&self) -> BTreeMap<u8, Vec<&VerseWithChapter>> {
        group_by(&self.verses, |v| v.verse.hizb)
    }

    /// Groups the verses by their chapter's revelation period.
    pub fn by_period(&self) -> BTreeMap<RevelationPeriod, Vec<&VerseWithChapter>> {
        group_by(&self.verses, |v| v.chapter.revelation_period)
    }

    /// Counts the verses per revelation period.
    pub fn period_breakdown(&self) -> PeriodBreakdown {
        PeriodBreakdown::tally(self.verses.iter().map(|v| v.chapter.revelation_period))
    }

    /// Returns the chapter contributing the most verses, with its verse count.
    pub fn most_frequent_chapter(&self) -> Option<(u16, usize)> {
        most_frequent(self.verses.iter().map(|v| v.chapter.id))
    }

    /// Returns the Juz contributing the most verses, with its verse count.
    pub fn most_frequent_juz(&self) -> Option<(u8, usize)> {
        most_frequent(self.verses.iter().map(|v| v.verse.juz))
    }

    /// Returns true if any verse is marked for prostration.
    pub fn has_prostration(&self) -> bool {
        self.verses.iter().any(|v| v.verse.prostration)
    }

    /// Returns the verses marked for prostration.
    pub fn prostration_verses(&self) -> Vec<&VerseWithChapter> {
        self.verses.iter().filter(|v| v.verse.prostration).collect()
    }
}

/// An ordered list of chapters produced by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterListing<Q> {
    /// The query parameters that produced this listing.
    #[serde(flatten)]
    pub query: Q,
    /// Number of chapters returned.
    pub total_results: usize,
    /// Matching chapters in corpus order.
    pub chapters: Vec<ChapterSummary>,
    /// Source attribution of the corpus text.
    #[serde(default = "default_source")]
    pub source: String,
}

/// Chapters whose name contains a search term.
pub type ChapterSearchResult = ChapterListing<NameQuery>;

impl<Q> ChapterListing<Q> {
    /// Wraps an ordered chapter list with its query and attribution.
    pub fn new(query: Q, chapters: Vec<ChapterSummary>, source: &str) -> Self {
        Self {
            query,
            total_results: chapters.len(),
            chapters,
            source: source.to_string(),
        }
    }

    /// Returns the number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Returns true if no chapter matched.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Groups the chapters by revelation period.
    pub fn by_period(&self) -> BTreeMap<RevelationPeriod, Vec<&ChapterSummary>> {
        group_by(&self.chapters, |c| c.revelation_period)
    }

    /// Counts the chapters per revelation period.
    pub fn period_breakdown(&self) -> PeriodBreakdown {
        PeriodBreakdown::tally(self.chapters.iter().map(|c| c.revelation_period))
    }

    /// Returns the total number of verses across the chapters.
    pub fn total_verses(&self) -> usize {
        self.chapters.iter().map(|c| usize::from(c.verse_count)).sum()
    }

    /// Returns the chapter with the most verses; ties go to the first.
    pub fn longest(&self) -> Option<&ChapterSummary> {
        self.chapters
            .iter()
            .reduce(|best, next| if next.verse_count > best.verse_count { next } else { best })
    }

    /// Returns the chapter with the fewest verses; ties go to the first.
    pub fn shortest(&self) -> Option<&ChapterSummary> {
        self.chapters
            .iter()
            .reduce(|best, next| if next.verse_count < best.verse_count { next } else { best })
    }
}
