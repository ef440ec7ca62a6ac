//! Argument checks run at the start of every query.
//!
//! Each check either passes or returns [`QueryError::InvalidArgument`] naming the parameter
//! and its valid range. None of them scan the corpus.

use crate::{Chapter, Corpus, HIZB_COUNT, JUZ_COUNT, QueryError};

/// Checks that `id` names a chapter of `corpus` and returns that chapter.
pub fn check_chapter_id(corpus: &Corpus, id: u16) -> Result<&Chapter, QueryError> {
    let count = corpus.chapter_count();
    if id == 0 || usize::from(id) > count {
        return Err(QueryError::invalid(
            "chapter id",
            format!("must be between 1 and {count}, got {id}"),
        ));
    }
    corpus
        .chapter(id)
        .ok_or_else(|| QueryError::not_found(format!("chapter {id}")))
}

/// Checks that `id` names a verse of `chapter`.
pub fn check_verse_id(chapter: &Chapter, id: u16) -> Result<(), QueryError> {
    if id == 0 || id > chapter.verse_count {
        return Err(QueryError::invalid(
            "verse id",
            format!(
                "must be between 1 and {} for chapter {}, got {id}",
                chapter.verse_count, chapter.id
            ),
        ));
    }
    Ok(())
}

/// Checks that `start..=end` is a non-empty range of verses within `chapter`.
pub fn check_verse_range(chapter: &Chapter, start: u16, end: u16) -> Result<(), QueryError> {
    let count = chapter.verse_count;
    if start == 0 || end == 0 || start > count || end > count {
        return Err(QueryError::invalid(
            "verse range",
            format!(
                "{start}-{end} is out of bounds, chapter {} has verses 1-{count}",
                chapter.id
            ),
        ));
    }
    if start > end {
        return Err(QueryError::invalid(
            "verse range",
            format!("start verse {start} is after end verse {end}"),
        ));
    }
    Ok(())
}

/// Checks that `juz` is between 1 and 30.
pub fn check_juz(juz: u8) -> Result<(), QueryError> {
    if !(1..=JUZ_COUNT).contains(&juz) {
        return Err(QueryError::invalid(
            "juz number",
            format!("must be between 1 and {JUZ_COUNT}, got {juz}"),
        ));
    }
    Ok(())
}

/// Checks that `hizb` is between 1 and 60.
pub fn check_hizb(hizb: u8) -> Result<(), QueryError> {
    if !(1..=HIZB_COUNT).contains(&hizb) {
        return Err(QueryError::invalid(
            "hizb number",
            format!("must be between 1 and {HIZB_COUNT}, got {hizb}"),
        ));
    }
    Ok(())
}

/// Checks that a search term is not empty or whitespace.
pub fn check_search_term(term: &str) -> Result<(), QueryError> {
    if term.trim().is_empty() {
        return Err(QueryError::invalid(
            "search term",
            "must not be empty or whitespace",
        ));
    }
    Ok(())
}
