//! Structural validation of a loaded corpus.
//!
//! Checks the canonical invariants: chapter and verse counts, contiguous numbering, Juz and
//! Hizb coverage, and the prostration count. Reports every violation rather than stopping at
//! the first one.

use std::{collections::BTreeSet, fmt};

use tracing::warn;

use crate::{CHAPTER_COUNT, Corpus, HIZB_COUNT, JUZ_COUNT, PROSTRATION_COUNT, VERSE_COUNT};

/// A violated structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    /// The corpus does not hold exactly 114 chapters.
    ChapterCount {
        /// Number of chapters found.
        found: usize,
    },
    /// A chapter sits at the wrong position in document order.
    ChapterOrder {
        /// 1-based position in the chapter list.
        position: usize,
        /// Id carried by the chapter at that position.
        id: u16,
    },
    /// The total verse count is not 6,236.
    VerseCount {
        /// Number of verses found.
        found: usize,
    },
    /// A chapter's verse list disagrees with its declared count.
    ChapterVerseCount {
        /// Chapter id.
        chapter: u16,
        /// Declared verse count.
        declared: u16,
        /// Length of the verse list.
        actual: usize,
    },
    /// A verse sits at the wrong position within its chapter.
    VerseOrder {
        /// Chapter id.
        chapter: u16,
        /// 1-based position in the verse list.
        position: usize,
        /// Id carried by the verse at that position.
        id: u16,
    },
    /// A verse's Juz number is outside 1-30.
    JuzOutOfRange {
        /// Chapter id.
        chapter: u16,
        /// Verse id.
        verse: u16,
        /// The offending Juz number.
        juz: u8,
    },
    /// A verse's Hizb number is outside 1-60.
    HizbOutOfRange {
        /// Chapter id.
        chapter: u16,
        /// Verse id.
        verse: u16,
        /// The offending Hizb number.
        hizb: u8,
    },
    /// A verse's Hizb does not belong to its Juz.
    HizbJuzMismatch {
        /// Chapter id.
        chapter: u16,
        /// Verse id.
        verse: u16,
        /// Juz number carried by the verse.
        juz: u8,
        /// Hizb number carried by the verse.
        hizb: u8,
    },
    /// Juz numbers decrease somewhere in document order.
    JuzOrder {
        /// Chapter id of the first verse out of order.
        chapter: u16,
        /// Verse id of the first verse out of order.
        verse: u16,
    },
    /// No verse belongs to this Juz.
    JuzUnused {
        /// The unused Juz number.
        juz: u8,
    },
    /// No verse belongs to this Hizb.
    HizbUnused {
        /// The unused Hizb number.
        hizb: u8,
    },
    /// The corpus does not mark exactly 15 prostration verses.
    ProstrationCount {
        /// Number of prostration verses found.
        found: usize,
    },
    /// Revelation-order ranks are not a permutation of 1-114.
    RevelationOrder {
        /// Chapter id.
        chapter: u16,
        /// The out-of-range or repeated rank.
        order: u16,
    },
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChapterCount { found } => {
                write!(f, "expected {CHAPTER_COUNT} chapters, found {found}")
            }
            Self::ChapterOrder { position, id } => {
                write!(f, "chapter at position {position} has id {id}")
            }
            Self::VerseCount { found } => {
                write!(f, "expected {VERSE_COUNT} verses, found {found}")
            }
            Self::ChapterVerseCount {
                chapter,
                declared,
                actual,
            } => write!(
                f,
                "chapter {chapter} declares {declared} verses but lists {actual}"
            ),
            Self::VerseOrder {
                chapter,
                position,
                id,
            } => write!(
                f,
                "chapter {chapter}: verse at position {position} has id {id}"
            ),
            Self::JuzOutOfRange {
                chapter,
                verse,
                juz,
            } => write!(
                f,
                "verse {chapter}:{verse} has juz {juz}, expected 1-{JUZ_COUNT}"
            ),
            Self::HizbOutOfRange {
                chapter,
                verse,
                hizb,
            } => write!(
                f,
                "verse {chapter}:{verse} has hizb {hizb}, expected 1-{HIZB_COUNT}"
            ),
            Self::HizbJuzMismatch {
                chapter,
                verse,
                juz,
                hizb,
            } => write!(
                f,
                "verse {chapter}:{verse} is in hizb {hizb}, which is not part of juz {juz}"
            ),
            Self::JuzOrder { chapter, verse } => {
                write!(f, "juz number decreases at verse {chapter}:{verse}")
            }
            Self::JuzUnused { juz } => write!(f, "no verse belongs to juz {juz}"),
            Self::HizbUnused { hizb } => write!(f, "no verse belongs to hizb {hizb}"),
            Self::ProstrationCount { found } => write!(
                f,
                "expected {PROSTRATION_COUNT} prostration verses, found {found}"
            ),
            Self::RevelationOrder { chapter, order } => write!(
                f,
                "chapter {chapter} has revelation order {order}, which is out of range or repeated"
            ),
        }
    }
}

/// Returns the Juz that contains the given Hizb. Each Juz is exactly two Hizb.
pub fn juz_of_hizb(hizb: u8) -> u8 {
    (hizb.saturating_sub(1) / 2) + 1
}

/// Returns true if the corpus satisfies every structural invariant.
pub fn validate_structure(corpus: &Corpus) -> bool {
    structure_report(corpus).is_empty()
}

/// Checks the corpus against every structural invariant and lists the violations.
///
/// An empty report means the corpus is structurally sound.
pub fn structure_report(corpus: &Corpus) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    let chapters = corpus.chapters();

    if chapters.len() != CHAPTER_COUNT {
        issues.push(StructureIssue::ChapterCount {
            found: chapters.len(),
        });
    }

    let mut seen_orders = BTreeSet::new();
    let mut juz_used = BTreeSet::new();
    let mut hizb_used = BTreeSet::new();
    let mut last_juz = 0u8;
    let mut juz_order_reported = false;
    let mut verse_total = 0usize;
    let mut prostrations = 0usize;

    for (index, chapter) in chapters.iter().enumerate() {
        if usize::from(chapter.id) != index + 1 {
            issues.push(StructureIssue::ChapterOrder {
                position: index + 1,
                id: chapter.id,
            });
        }
        if chapter.revelation_order == 0
            || usize::from(chapter.revelation_order) > CHAPTER_COUNT
            || !seen_orders.insert(chapter.revelation_order)
        {
            issues.push(StructureIssue::RevelationOrder {
                chapter: chapter.id,
                order: chapter.revelation_order,
            });
        }
        if usize::from(chapter.verse_count) != chapter.verses.len() {
            issues.push(StructureIssue::ChapterVerseCount {
                chapter: chapter.id,
                declared: chapter.verse_count,
                actual: chapter.verses.len(),
            });
        }

        for (position, verse) in chapter.verses.iter().enumerate() {
            verse_total += 1;
            if verse.prostration {
                prostrations += 1;
            }
            if usize::from(verse.id) != position + 1 {
                issues.push(StructureIssue::VerseOrder {
                    chapter: chapter.id,
                    position: position + 1,
                    id: verse.id,
                });
            }

            let juz_ok = (1..=JUZ_COUNT).contains(&verse.juz);
            let hizb_ok = (1..=HIZB_COUNT).contains(&verse.hizb);
            if juz_ok {
                juz_used.insert(verse.juz);
            } else {
                issues.push(StructureIssue::JuzOutOfRange {
                    chapter: chapter.id,
                    verse: verse.id,
                    juz: verse.juz,
                });
            }
            if hizb_ok {
                hizb_used.insert(verse.hizb);
            } else {
                issues.push(StructureIssue::HizbOutOfRange {
                    chapter: chapter.id,
                    verse: verse.id,
                    hizb: verse.hizb,
                });
            }
            if juz_ok && hizb_ok && juz_of_hizb(verse.hizb) != verse.juz {
                issues.push(StructureIssue::HizbJuzMismatch {
                    chapter: chapter.id,
                    verse: verse.id,
                    juz: verse.juz,
                    hizb: verse.hizb,
                });
            }
            if verse.juz < last_juz && !juz_order_reported {
                issues.push(StructureIssue::JuzOrder {
                    chapter: chapter.id,
                    verse: verse.id,
                });
                juz_order_reported = true;
            }
            last_juz = last_juz.max(verse.juz);
        }
    }

    if verse_total != VERSE_COUNT {
        issues.push(StructureIssue::VerseCount { found: verse_total });
    }
    issues.extend(
        (1..=JUZ_COUNT)
            .filter(|juz| !juz_used.contains(juz))
            .map(|juz| StructureIssue::JuzUnused { juz }),
    );
    issues.extend(
        (1..=HIZB_COUNT)
            .filter(|hizb| !hizb_used.contains(hizb))
            .map(|hizb| StructureIssue::HizbUnused { hizb }),
    );
    if prostrations != PROSTRATION_COUNT {
        issues.push(StructureIssue::ProstrationCount {
            found: prostrations,
        });
    }

    for issue in &issues {
        warn!(%issue, "corpus structure issue");
    }

    issues
}
