//! The query engine: every read operation over a loaded corpus.

use std::sync::Arc;

use mushaf_corpus::{
    Chapter, Corpus, CorpusStore, LoadError, QueryError, Verse, juz_of_hizb,
    validate::{
        check_chapter_id, check_hizb, check_juz, check_search_term, check_verse_id,
        check_verse_range,
    },
};
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    random::RandomMode,
    result::{
        ChapterSearchResult, HizbQuery, HizbResult, JuzQuery, JuzResult, NameQuery,
        ProstrationQuery, ProstrationResult, RangeQuery, RangeResult, SearchResult, TextQuery,
        VerseListing, VerseSpan, VerseWithChapter,
    },
    statistics::StatisticsResult,
};

/// Answers queries against one immutable corpus.
///
/// The engine owns a shared handle to the corpus, so cloning it is cheap and engines built
/// over different corpora are fully independent. Every operation checks its arguments before
/// touching the corpus and returns either a complete result or an error, never a partial one.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    /// The corpus all queries read.
    corpus: Arc<Corpus>,
    /// Selection strategy for [`QueryEngine::random_verse`].
    random_mode: RandomMode,
}

impl QueryEngine {
    /// Creates an engine over a loaded corpus.
    pub fn new(corpus: impl Into<Arc<Corpus>>) -> Self {
        Self {
            corpus: corpus.into(),
            random_mode: RandomMode::default(),
        }
    }

    /// Loads the store's corpus if needed and creates an engine over it.
    pub fn from_store(store: &CorpusStore) -> Result<Self, LoadError> {
        Ok(Self::new(store.load()?))
    }

    /// Sets how random verses are drawn.
    #[must_use]
    pub fn with_random_mode(mut self, mode: RandomMode) -> Self {
        self.random_mode = mode;
        self
    }

    /// Returns the random selection mode.
    pub fn random_mode(&self) -> RandomMode {
        self.random_mode
    }

    /// Returns the whole corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Returns the source attribution carried by every result.
    fn source(&self) -> &str {
        self.corpus.source()
    }

    /// Looks up one verse joined with its chapter.
    pub fn verse(&self, chapter_id: u16, verse_id: u16) -> Result<VerseWithChapter, QueryError> {
        let chapter = check_chapter_id(&self.corpus, chapter_id)?;
        check_verse_id(chapter, verse_id)?;
        let verse = chapter
            .verse(verse_id)
            .ok_or_else(|| QueryError::not_found(format!("verse {chapter_id}:{verse_id}")))?;
        Ok(VerseWithChapter::new(chapter, verse))
    }

    /// Looks up one chapter with all of its verses.
    pub fn chapter(&self, chapter_id: u16) -> Result<&Chapter, QueryError> {
        check_chapter_id(&self.corpus, chapter_id)
    }

    /// Finds every verse whose text contains `term`.
    ///
    /// Matching is an exact, case-sensitive substring test on the term as given.
    pub fn search_text(&self, term: &str) -> Result<SearchResult, QueryError> {
        check_search_term(term)?;
        debug!(term, "searching verse text");
        let verses = self.collect(|_, verse| verse.text.contains(term));
        Ok(VerseListing::new(
            TextQuery {
                term: term.to_string(),
            },
            verses,
            self.source(),
        ))
    }

    /// Draws a random verse using the engine's [`RandomMode`] and the thread-local generator.
    pub fn random_verse(&self) -> Result<VerseWithChapter, QueryError> {
        self.random_verse_with(&mut rand::thread_rng())
    }

    /// Draws a random verse using the engine's [`RandomMode`] and the given generator.
    pub fn random_verse_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<VerseWithChapter, QueryError> {
        let (chapter, verse) = self.random_mode.pick(&self.corpus, rng)?;
        trace!(chapter = chapter.id, verse = verse.id, "picked random verse");
        Ok(VerseWithChapter::new(chapter, verse))
    }

    /// Lists every verse marked for prostration, in corpus order.
    pub fn prostration_verses(&self) -> ProstrationResult {
        debug!("collecting prostration verses");
        let verses = self.collect(|_, verse| verse.prostration);
        VerseListing::new(ProstrationQuery {}, verses, self.source())
    }

    /// Returns verses `start..=end` of one chapter.
    pub fn verse_range(
        &self,
        chapter_id: u16,
        start: u16,
        end: u16,
    ) -> Result<RangeResult, QueryError> {
        let chapter = check_chapter_id(&self.corpus, chapter_id)?;
        check_verse_range(chapter, start, end)?;
        let verses = chapter
            .verse_slice(start, end)
            .iter()
            .map(|verse| VerseWithChapter::new(chapter, verse))
            .collect();
        Ok(VerseListing::new(
            RangeQuery {
                chapter: chapter.summary(),
                range: VerseSpan::new(start, end),
            },
            verses,
            self.source(),
        ))
    }

    /// Returns every verse of one Juz, in corpus order.
    pub fn juz(&self, juz: u8) -> Result<JuzResult, QueryError> {
        check_juz(juz)?;
        debug!(juz, "collecting juz");
        let verses = self.collect(|_, verse| verse.juz == juz);
        Ok(VerseListing::new(JuzQuery { juz }, verses, self.source()))
    }

    /// Returns every verse of one Hizb, in corpus order, with the Juz that contains it.
    pub fn hizb(&self, hizb: u8) -> Result<HizbResult, QueryError> {
        check_hizb(hizb)?;
        debug!(hizb, "collecting hizb");
        let verses = self.collect(|_, verse| verse.hizb == hizb);
        Ok(VerseListing::new(
            HizbQuery {
                hizb,
                juz: juz_of_hizb(hizb),
            },
            verses,
            self.source(),
        ))
    }

    /// Finds chapters whose name contains `term`.
    ///
    /// The Latin-script name is compared case-insensitively. The original-script name is
    /// compared with the term as given.
    pub fn search_chapters(&self, term: &str) -> Result<ChapterSearchResult, QueryError> {
        check_search_term(term)?;
        debug!(term, "searching chapter names");
        let lowered = term.to_lowercase();
        let chapters = self
            .corpus
            .chapters()
            .iter()
            .filter(|chapter| {
                chapter.transliteration.to_lowercase().contains(&lowered)
                    || chapter.name.contains(term)
            })
            .map(Chapter::summary)
            .collect();
        Ok(ChapterSearchResult::new(
            NameQuery {
                term: term.to_string(),
            },
            chapters,
            self.source(),
        ))
    }

    /// Computes chapter-length statistics over the whole corpus.
    pub fn statistics(&self) -> Result<StatisticsResult, QueryError> {
        StatisticsResult::compute(&self.corpus)
    }

    /// Scans the corpus once, keeping matching verses in order.
    fn collect(&self, keep: impl Fn(&Chapter, &Verse) -> bool) -> Vec<VerseWithChapter> {
        self.corpus
            .verses()
            .filter(|&(chapter, verse)| keep(chapter, verse))
            .map(|(chapter, verse)| VerseWithChapter::new(chapter, verse))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use mushaf_corpus::{CHAPTER_COUNT, fixture};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn canonical() -> QueryEngine {
        QueryEngine::new(fixture::canonical_corpus())
    }

    #[test]
    fn verse_boundaries() {
        let engine = canonical();
        let first = engine.verse(1, 1).unwrap();
        assert_eq!(first.reference(), "1:1");
        assert_eq!(first.chapter.transliteration.as_ref(), "Al-Faatiha");

        assert!(engine.verse(1, 0).unwrap_err().is_invalid_argument());
        assert!(engine.verse(1, 8).unwrap_err().is_invalid_argument());
        assert!(engine.verse(0, 1).unwrap_err().is_invalid_argument());
        assert!(engine.verse(115, 1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn chapter_lookup() {
        let engine = canonical();
        let chapter = engine.chapter(1).unwrap();
        assert_eq!(chapter.verse_count, 7);
        assert_eq!(chapter.transliteration.as_ref(), "Al-Faatiha");
        assert!(engine.chapter(0).unwrap_err().is_invalid_argument());
        assert!(engine.chapter(115).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn search_text_is_exact_substring() {
        let engine = canonical();
        let single = engine.search_text("(2:255)").unwrap();
        assert_eq!(single.total_results, 1);
        assert_eq!(single.verses[0].reference(), "2:255");

        let empty = engine.search_text("no such text").unwrap();
        assert!(empty.is_empty());
        assert!(engine.search_text("").unwrap_err().is_invalid_argument());
        assert!(engine.search_text("  \t").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn search_text_is_case_sensitive() {
        let mut document = fixture::small_document();
        document.chapters[0].verses[0].text = Arc::from("In the Name (1:1)");
        let engine = QueryEngine::new(Corpus::from_document(document).unwrap());

        assert_eq!(engine.search_text("In the Name").unwrap().total_results, 1);
        assert!(engine.search_text("in the name").unwrap().is_empty());
        assert!(engine.search_text("IN THE NAME").unwrap().is_empty());
    }

    #[test]
    fn search_text_matches_the_term_untrimmed() {
        let engine = canonical();
        let full = engine.search_text("الفاتحة (1:1)").unwrap();
        assert_eq!(full.total_results, 1);
        assert_eq!(full.query.term, "الفاتحة (1:1)");

        // The space before the marker is part of every verse text.
        let leading = engine.search_text(" (1:1)").unwrap();
        assert_eq!(leading.total_results, 1);
        assert_eq!(leading.verses[0].reference(), "1:1");
        assert_eq!(leading.query.term, " (1:1)");

        assert!(engine.search_text("(1:1) ").unwrap().is_empty());
    }

    #[test]
    fn search_text_keeps_corpus_order() {
        let engine = canonical();
        let result = engine.search_text(":1)").unwrap();
        // Verse 1 of every chapter.
        assert_eq!(result.total_results, CHAPTER_COUNT);
        let ids = result.chapter_ids();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prostrations() {
        let result = canonical().prostration_verses();
        assert_eq!(result.total_results, 15);
        assert!(result.verses.iter().all(|v| v.verse.prostration));
        assert_eq!(result.verses[0].reference(), "7:206");
    }

    #[test]
    fn ranges() {
        let engine = canonical();
        let range = engine.verse_range(1, 1, 7).unwrap();
        assert_eq!(range.query.range.count, 7);
        assert_eq!(range.query.chapter.transliteration.as_ref(), "Al-Faatiha");
        assert_eq!(range.total_results, 7);

        let single = engine.verse_range(2, 255, 255).unwrap();
        assert_eq!(single.verses[0].reference(), "2:255");

        let reversed = engine.verse_range(1, 5, 3).unwrap_err();
        assert!(reversed.is_invalid_argument());
        assert!(reversed.to_string().contains("after"));
        let outside = engine.verse_range(1, 1, 8).unwrap_err();
        assert!(outside.to_string().contains("out of bounds"));
    }

    #[test]
    fn divisions() {
        let engine = canonical();
        let juz = engine.juz(30).unwrap();
        assert_eq!(juz.verses[0].reference(), "78:1");
        assert_eq!(juz.verses.last().map(VerseWithChapter::reference).as_deref(), Some("114:6"));

        let hizb = engine.hizb(3).unwrap();
        assert_eq!(hizb.query.juz, 2);
        assert!(hizb.verses.iter().all(|v| v.verse.hizb == 3));

        assert!(engine.juz(0).unwrap_err().is_invalid_argument());
        assert!(engine.juz(31).unwrap_err().is_invalid_argument());
        assert!(engine.hizb(61).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn chapter_name_search() {
        let engine = canonical();
        let latin = engine.search_chapters("faatiha").unwrap();
        assert_eq!(latin.total_results, 1);
        assert_eq!(latin.chapters[0].id, 1);

        let upper = engine.search_chapters("AL-BAQARA").unwrap();
        assert_eq!(upper.chapters.first().map(|c| c.id), Some(2));

        let first = engine.chapter(1).unwrap();
        let by_script = engine.search_chapters(&first.name).unwrap();
        assert!(by_script.chapters.iter().any(|c| c.id == 1));

        assert!(engine.search_chapters(" ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn chapter_name_search_matches_script_fragments() {
        let engine = canonical();
        let fragment = engine.search_chapters("بقر").unwrap();
        assert!(fragment.chapters.iter().any(|c| c.id == 2));
        assert!(fragment.chapters.iter().all(|c| c.name.contains("بقر")));

        assert!(engine.search_chapters("قرةب").unwrap().chapters.is_empty());
    }

    #[test]
    fn seeded_random_verse_is_reproducible() {
        let engine = canonical().with_random_mode(RandomMode::Uniform);
        let a = engine.random_verse_with(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = engine.random_verse_with(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        assert!(engine.random_verse().is_ok());
    }

    #[test]
    fn engines_over_different_corpora_are_independent() {
        let full = canonical();
        let small = QueryEngine::new(fixture::small_corpus());
        assert!(full.chapter(4).is_ok());
        assert!(small.chapter(4).unwrap_err().is_invalid_argument());
        assert_eq!(small.statistics().unwrap().total_verses, 29);
        assert_eq!(full.statistics().unwrap().total_verses, 6236);
    }

    #[test]
    fn from_store_loads_once() {
        let store = CorpusStore::from_json(fixture::small_json());
        let engine = QueryEngine::from_store(&store).unwrap();
        assert!(store.is_loaded());
        assert_eq!(engine.corpus().chapter_count(), 3);
    }
}
