//! Aggregate statistics over chapter lengths.

use std::collections::BTreeMap;

use mushaf_corpus::{
    Chapter, ChapterSummary, Corpus, DEFAULT_SOURCE, QueryError, RevelationPeriod,
};
use serde::{Deserialize, Serialize};

use crate::grouping::{most_frequent, percentage};

/// Serde default for result attribution.
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Chapter-length statistics for one revelation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatistics {
    /// Number of chapters in the period.
    pub chapters: usize,
    /// Total verses across those chapters.
    pub total_verses: usize,
    /// Mean chapter length.
    pub average_verses: f64,
    /// Shortest chapter length.
    pub min_verses: u16,
    /// Longest chapter length.
    pub max_verses: u16,
}

/// Corpus-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Number of chapters.
    pub total_chapters: usize,
    /// Number of verses.
    pub total_verses: usize,
    /// Number of chapters per revelation period.
    pub chapters_by_period: BTreeMap<RevelationPeriod, usize>,
    /// Mean chapter length.
    pub average_verses_per_chapter: f64,
    /// The longest chapter; the first one if several tie.
    pub longest_chapter: ChapterSummary,
    /// The shortest chapter; the first one if several tie.
    pub shortest_chapter: ChapterSummary,
    /// Median chapter length.
    pub median_verses_per_chapter: f64,
    /// Most common chapter length; the first one seen if several tie.
    pub mode_verses_per_chapter: u16,
    /// Chapter length mapped to the number of chapters with that length.
    pub verse_count_histogram: BTreeMap<u16, usize>,
    /// Per-period chapter-length statistics. Periods without chapters are omitted.
    pub periods: BTreeMap<RevelationPeriod, PeriodStatistics>,
    /// Source attribution of the corpus text.
    #[serde(default = "default_source")]
    pub source: String,
}

impl StatisticsResult {
    /// Computes statistics over every chapter of the corpus.
    pub fn compute(corpus: &Corpus) -> Result<Self, QueryError> {
        let chapters = corpus.chapters();
        let longest = chapters
            .iter()
            .reduce(|best, next| if next.verse_count > best.verse_count { next } else { best })
            .ok_or_else(|| QueryError::not_found("chapters in corpus"))?;
        let shortest = chapters
            .iter()
            .reduce(|best, next| if next.verse_count < best.verse_count { next } else { best })
            .ok_or_else(|| QueryError::not_found("chapters in corpus"))?;
        let lengths: Vec<u16> = chapters.iter().map(|c| c.verse_count).collect();
        let (mode, _) = most_frequent(lengths.iter().copied())
            .ok_or_else(|| QueryError::not_found("chapters in corpus"))?;

        let mut histogram: BTreeMap<u16, usize> = BTreeMap::new();
        for length in &lengths {
            *histogram.entry(*length).or_default() += 1;
        }

        let mut periods = BTreeMap::new();
        for period in RevelationPeriod::ALL {
            let members: Vec<&Chapter> = chapters
                .iter()
                .filter(|c| c.revelation_period == period)
                .collect();
            if let Some(stats) = period_statistics(&members) {
                periods.insert(period, stats);
            }
        }

        let total_verses: usize = lengths.iter().map(|n| usize::from(*n)).sum();
        Ok(Self {
            total_chapters: chapters.len(),
            total_verses,
            chapters_by_period: RevelationPeriod::ALL
                .iter()
                .map(|p| (*p, corpus.period_chapter_count(*p)))
                .collect(),
            average_verses_per_chapter: total_verses as f64 / chapters.len() as f64,
            longest_chapter: longest.summary(),
            shortest_chapter: shortest.summary(),
            median_verses_per_chapter: median(&lengths),
            mode_verses_per_chapter: mode,
            verse_count_histogram: histogram,
            periods,
            source: corpus.source().to_string(),
        })
    }

    /// Returns the share of chapters in a period, as a percentage.
    pub fn period_percentage(&self, period: RevelationPeriod) -> f64 {
        let count = self.chapters_by_period.get(&period).copied().unwrap_or(0);
        percentage(count, self.total_chapters)
    }

    /// Returns how many chapters have exactly `verse_count` verses.
    pub fn chapters_with_length(&self, verse_count: u16) -> usize {
        self.verse_count_histogram
            .get(&verse_count)
            .copied()
            .unwrap_or(0)
    }
}

/// Computes length statistics for a group of chapters, or `None` if the group is empty.
fn period_statistics(chapters: &[&Chapter]) -> Option<PeriodStatistics> {
    let min_verses = chapters.iter().map(|c| c.verse_count).min()?;
    let max_verses = chapters.iter().map(|c| c.verse_count).max()?;
    let total_verses: usize = chapters.iter().map(|c| usize::from(c.verse_count)).sum();
    Some(PeriodStatistics {
        chapters: chapters.len(),
        total_verses,
        average_verses: total_verses as f64 / chapters.len() as f64,
        min_verses,
        max_verses,
    })
}

/// Median of the values: the middle value, or the mean of the two middle values.
fn median(values: &[u16]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    }
}
