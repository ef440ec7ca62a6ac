//! Random verse selection.

use mushaf_corpus::{Chapter, Corpus, QueryError, Verse};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

/// How a random verse is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomMode {
    /// Pick a chapter uniformly, then a verse uniformly within it.
    ///
    /// Verses in short chapters are individually more likely than verses in long ones.
    #[default]
    ChapterWeighted,
    /// Pick uniformly over every verse of the corpus.
    Uniform,
}

impl RandomMode {
    /// Draws one verse from the corpus.
    pub fn pick<'a, R: Rng + ?Sized>(
        self,
        corpus: &'a Corpus,
        rng: &mut R,
    ) -> Result<(&'a Chapter, &'a Verse), QueryError> {
        match self {
            Self::ChapterWeighted => {
                let chapter = corpus
                    .chapters()
                    .choose(rng)
                    .ok_or_else(|| QueryError::not_found("chapters in corpus"))?;
                let verse = chapter
                    .verses
                    .choose(rng)
                    .ok_or_else(|| QueryError::not_found(format!("verses in chapter {}", chapter.id)))?;
                Ok((chapter, verse))
            }
            Self::Uniform => {
                let total = corpus.verse_count();
                if total == 0 {
                    return Err(QueryError::not_found("verses in corpus"));
                }
                let index = rng.gen_range(0..total);
                corpus
                    .verses()
                    .nth(index)
                    .ok_or_else(|| QueryError::not_found(format!("verse at position {index}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mushaf_corpus::fixture;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn default_is_chapter_weighted() {
        assert_eq!(RandomMode::default(), RandomMode::ChapterWeighted);
    }

    #[test]
    fn picks_are_real_verses() {
        let corpus = fixture::canonical_corpus();
        let mut rng = StdRng::seed_from_u64(7);
        for mode in [RandomMode::ChapterWeighted, RandomMode::Uniform] {
            for _ in 0..200 {
                let (chapter, verse) = mode.pick(&corpus, &mut rng).unwrap();
                assert_eq!(corpus.verse(chapter.id, verse.id), Some(verse));
            }
        }
    }

    #[test]
    fn same_seed_same_verse() {
        let corpus = fixture::canonical_corpus();
        for mode in [RandomMode::ChapterWeighted, RandomMode::Uniform] {
            let a = mode.pick(&corpus, &mut StdRng::seed_from_u64(42)).unwrap();
            let b = mode.pick(&corpus, &mut StdRng::seed_from_u64(42)).unwrap();
            assert_eq!((a.0.id, a.1.id), (b.0.id, b.1.id));
        }
    }

    #[test]
    fn chapter_weighted_favours_short_chapters() {
        // In the small corpus, chapter 3 holds 3 of 29 verses but a third of the chapters.
        let corpus = fixture::small_corpus();
        let mut rng = StdRng::seed_from_u64(1);
        let draws = 3000;
        let weighted = (0..draws)
            .filter(|_| {
                RandomMode::ChapterWeighted
                    .pick(&corpus, &mut rng)
                    .is_ok_and(|(c, _)| c.id == 3)
            })
            .count();
        let uniform = (0..draws)
            .filter(|_| {
                RandomMode::Uniform
                    .pick(&corpus, &mut rng)
                    .is_ok_and(|(c, _)| c.id == 3)
            })
            .count();
        assert!(weighted > 800, "weighted draws from chapter 3: {weighted}");
        assert!(uniform < 600, "uniform draws from chapter 3: {uniform}");
    }

    #[test]
    fn mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RandomMode::ChapterWeighted).unwrap(),
            "\"chapter_weighted\""
        );
    }
}
