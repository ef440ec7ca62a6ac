//! Implementation of `mushaf range`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;

use crate::cli::{
    args::RangeCommand,
    context::CommandContext,
    output::{print_json, print_verse_listing, query_failed},
};

/// Shows consecutive verses of one chapter.
pub fn run(ctx: &mut CommandContext, cmd: &RangeCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = match engine.verse_range(cmd.chapter, cmd.start, cmd.end) {
        Ok(result) => result,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let title = format!(
                "{} {}:{}-{}",
                result.query.chapter.transliteration,
                result.query.chapter.id,
                result.query.range.start,
                result.query.range.end
            );
            print_verse_listing(&title, &result.verses, &result.period_breakdown());
            ExitCode::SUCCESS
        }
    }
}
