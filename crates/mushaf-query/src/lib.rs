//! Queries over the mushaf corpus.
//!
//! This crate provides the read side of mushaf:
//! - [`QueryEngine`] with verse, chapter, range, Juz, Hizb, search and statistics queries
//! - Result containers that carry their query parameters and source attribution
//! - Grouping and frequency helpers shared by every result type
//! - Random verse selection, chapter-weighted or uniform
//!
//! # Example
//!
//! ```no_run
//! use mushaf_corpus::CorpusStore;
//! use mushaf_query::QueryEngine;
//!
//! let store = CorpusStore::from_path("data/mushaf.json");
//! let engine = QueryEngine::from_store(&store).unwrap();
//!
//! let verse = engine.verse(2, 255).unwrap();
//! println!("{} {}", verse.reference(), verse.verse.text);
//!
//! let juz = engine.juz(30).unwrap();
//! println!("juz 30 has {} verses", juz.total_results);
//! ```

#![warn(missing_docs)]

mod engine;
mod grouping;
mod random;
mod result;
mod statistics;

pub use engine::QueryEngine;
pub use grouping::{PeriodBreakdown, frequencies, group_by, most_frequent, percentage};
pub use random::RandomMode;
pub use result::{
    ChapterListing, ChapterSearchResult, HizbQuery, HizbResult, JuzQuery, JuzResult, NameQuery,
    ProstrationQuery, ProstrationResult, RangeQuery, RangeResult, SearchResult, TextQuery,
    VerseListing, VerseSpan, VerseWithChapter,
};
pub use statistics::{PeriodStatistics, StatisticsResult};
