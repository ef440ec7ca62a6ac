//! Implementation of `mushaf search`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;

use crate::cli::{
    args::TermCommand,
    context::CommandContext,
    output::{dim, plural, print_json, print_verse_listing, query_failed},
};

/// Lists verses whose text contains the term.
pub fn run(ctx: &mut CommandContext, cmd: &TermCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = match engine.search_text(&cmd.term) {
        Ok(result) => result,
        Err(e) => return query_failed(&e),
    };

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let title = format!(
                "\"{}\": {}",
                result.query.term,
                plural(result.total_results, "verse")
            );
            print_verse_listing(&title, &result.verses, &result.period_breakdown());
            if let Some((chapter, count)) = result.most_frequent_chapter() {
                println!(
                    "{}",
                    dim(&format!("Most matches in chapter {chapter} ({count})"))
                );
            }
            ExitCode::SUCCESS
        }
    }
}
