//! Implementation of `mushaf chapter`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;
use mushaf_query::VerseWithChapter;

use crate::cli::{
    args::ChapterCommand,
    context::CommandContext,
    output::{chapter_table, header, plural, print_json, query_failed, verse_table},
};

/// Shows a chapter's details and, unless `--summary` is given, its verses.
pub fn run(ctx: &mut CommandContext, cmd: &ChapterCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let chapter = match engine.chapter(cmd.id) {
        Ok(chapter) => chapter,
        Err(e) => return query_failed(&e),
    };

    if format == OutputFormat::Json {
        return if cmd.summary {
            print_json(&chapter.summary())
        } else {
            print_json(chapter)
        };
    }

    println!(
        "{}",
        header(&format!(
            "{}. {} ({})",
            chapter.id, chapter.transliteration, chapter.name
        ))
    );
    println!("{}", chapter_table(&[chapter.summary()]));
    if cmd.summary {
        return ExitCode::SUCCESS;
    }

    let verses: Vec<VerseWithChapter> = chapter
        .verses
        .iter()
        .map(|verse| VerseWithChapter::new(chapter, verse))
        .collect();
    println!();
    println!("{}", header(&plural(verses.len(), "verse")));
    println!("{}", verse_table(&verses));
    ExitCode::SUCCESS
}
