//! Terminal styling, tables and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED,
};
use mushaf_corpus::{ChapterSummary, QueryError, RevelationPeriod};
use mushaf_query::{PeriodBreakdown, VerseWithChapter};
use serde::Serialize;

/// ANSI color codes for terminal output.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reports a failed query.
pub fn query_failed(error: &QueryError) -> ExitCode {
    eprintln!("error: {error}");
    ExitCode::FAILURE
}

/// Returns an empty table with the shared style.
pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builds a table of verses, one row each.
pub fn verse_table(verses: &[VerseWithChapter]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Ref", "Chapter", "Juz", "Hizb", "Text"]);
    for entry in verses {
        let mut reference = entry.reference();
        if entry.verse.prostration {
            reference.push_str(" *");
        }
        table.add_row(vec![
            Cell::new(reference),
            Cell::new(&entry.chapter.transliteration),
            Cell::new(entry.verse.juz).set_alignment(CellAlignment::Right),
            Cell::new(entry.verse.hizb).set_alignment(CellAlignment::Right),
            Cell::new(&entry.verse.text),
        ]);
    }
    table
}

/// Builds a table of chapter summaries, one row each.
pub fn chapter_table(chapters: &[ChapterSummary]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Name", "Transliteration", "Period", "Verses", "Order"]);
    for chapter in chapters {
        table.add_row(vec![
            Cell::new(chapter.id).set_alignment(CellAlignment::Right),
            Cell::new(&chapter.name),
            Cell::new(&chapter.transliteration),
            Cell::new(chapter.revelation_period),
            Cell::new(chapter.verse_count).set_alignment(CellAlignment::Right),
            Cell::new(chapter.revelation_order).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Prints a verse listing with a title line and a period breakdown footer.
pub fn print_verse_listing(
    title: &str,
    verses: &[VerseWithChapter],
    breakdown: &PeriodBreakdown,
) {
    println!("{}", header(title));
    if verses.is_empty() {
        println!("{}", dim("No verses found."));
        return;
    }
    println!("{}", verse_table(verses));
    println!("{}", dim(&format_breakdown(breakdown)));
}

/// Summarizes a period breakdown, e.g. `Meccan 3 (75.0%), Medinan 1 (25.0%)`.
pub fn format_breakdown(breakdown: &PeriodBreakdown) -> String {
    RevelationPeriod::ALL
        .iter()
        .map(|&period| {
            format!(
                "{period} {} ({:.1}%)",
                breakdown.count(period),
                breakdown.percentage(period)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a count with a singular or plural noun.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
