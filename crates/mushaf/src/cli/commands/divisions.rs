//! Implementation of `mushaf juz` and `mushaf hizb`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;

use crate::cli::{
    args::DivisionCommand,
    context::CommandContext,
    output::{plural, print_json, print_verse_listing, query_failed},
};

/// Lists the verses of one Juz.
pub fn juz(ctx: &mut CommandContext, cmd: &DivisionCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = match engine.juz(cmd.number) {
        Ok(result) => result,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let title = format!(
                "Juz {}: {} across {}",
                result.query.juz,
                plural(result.total_results, "verse"),
                plural(result.chapter_ids().len(), "chapter")
            );
            print_verse_listing(&title, &result.verses, &result.period_breakdown());
            ExitCode::SUCCESS
        }
    }
}

/// Lists the verses of one Hizb.
pub fn hizb(ctx: &mut CommandContext, cmd: &DivisionCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = match engine.hizb(cmd.number) {
        Ok(result) => result,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let title = format!(
                "Hizb {} (Juz {}): {}",
                result.query.hizb,
                result.query.juz,
                plural(result.total_results, "verse")
            );
            print_verse_listing(&title, &result.verses, &result.period_breakdown());
            ExitCode::SUCCESS
        }
    }
}
