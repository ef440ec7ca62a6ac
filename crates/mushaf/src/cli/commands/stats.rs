//! Implementation of `mushaf stats`.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment};
use mushaf_config::OutputFormat;
use mushaf_query::StatisticsResult;

use crate::cli::{
    context::CommandContext,
    output::{dim, header, new_table, print_json, query_failed, subheader},
};

/// Shows chapter-length statistics for the whole corpus.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let stats = match engine.statistics() {
        Ok(stats) => stats,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Table => {
            print_stats(&stats);
            ExitCode::SUCCESS
        }
    }
}

/// Prints the corpus-wide figures followed by one row per revelation period.
fn print_stats(stats: &StatisticsResult) {
    println!("{}", header("Corpus statistics"));

    let mut overview = new_table();
    let rows = [
        ("Chapters", stats.total_chapters.to_string()),
        ("Verses", stats.total_verses.to_string()),
        (
            "Average verses per chapter",
            format!("{:.2}", stats.average_verses_per_chapter),
        ),
        (
            "Median verses per chapter",
            format!("{:.1}", stats.median_verses_per_chapter),
        ),
        (
            "Most common length",
            format!(
                "{} ({} chapters)",
                stats.mode_verses_per_chapter,
                stats.chapters_with_length(stats.mode_verses_per_chapter)
            ),
        ),
        (
            "Longest chapter",
            format!(
                "{}. {} ({})",
                stats.longest_chapter.id,
                stats.longest_chapter.transliteration,
                stats.longest_chapter.verse_count
            ),
        ),
        (
            "Shortest chapter",
            format!(
                "{}. {} ({})",
                stats.shortest_chapter.id,
                stats.shortest_chapter.transliteration,
                stats.shortest_chapter.verse_count
            ),
        ),
    ];
    for (label, value) in rows {
        overview.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{overview}");

    println!();
    println!("{}", subheader("By revelation period"));
    let mut periods = new_table();
    periods.set_header(vec![
        "Period", "Chapters", "Share", "Verses", "Average", "Min", "Max",
    ]);
    for (period, period_stats) in &stats.periods {
        periods.add_row(vec![
            Cell::new(period),
            Cell::new(period_stats.chapters).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", stats.period_percentage(*period)))
                .set_alignment(CellAlignment::Right),
            Cell::new(period_stats.total_verses).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", period_stats.average_verses))
                .set_alignment(CellAlignment::Right),
            Cell::new(period_stats.min_verses).set_alignment(CellAlignment::Right),
            Cell::new(period_stats.max_verses).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{periods}");
    println!("{}", dim(&format!("Source: {}", stats.source)));
}
