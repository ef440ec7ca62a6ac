//! Implementation of `mushaf verse`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;
use mushaf_query::VerseWithChapter;

use crate::cli::{
    args::VerseCommand,
    context::CommandContext,
    output::{dim, header, print_json, query_failed},
};

/// Shows a single verse.
pub fn run(ctx: &mut CommandContext, cmd: &VerseCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let verse = match engine.verse(cmd.chapter, cmd.verse) {
        Ok(verse) => verse,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&verse),
        OutputFormat::Table => {
            print_verse(&verse);
            ExitCode::SUCCESS
        }
    }
}

/// Prints a verse as a heading, its text and a location line.
pub fn print_verse(verse: &VerseWithChapter) {
    println!(
        "{} {}",
        header(&verse.reference()),
        header(&format!(
            "{} ({})",
            verse.chapter.transliteration, verse.chapter.name
        ))
    );
    println!("{}", verse.verse.text);
    let mut location = format!(
        "Juz {}, Hizb {}, {}",
        verse.verse.juz, verse.verse.hizb, verse.chapter.revelation_period
    );
    if verse.verse.prostration {
        location.push_str(", prostration");
    }
    println!("{}", dim(&location));
}
