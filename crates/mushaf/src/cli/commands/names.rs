//! Implementation of `mushaf names`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;

use crate::cli::{
    args::TermCommand,
    context::CommandContext,
    output::{chapter_table, dim, format_breakdown, header, plural, print_json, query_failed},
};

/// Lists chapters whose name contains the term.
pub fn run(ctx: &mut CommandContext, cmd: &TermCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = match engine.search_chapters(&cmd.term) {
        Ok(result) => result,
        Err(e) => return query_failed(&e),
    };

    if format == OutputFormat::Json {
        return print_json(&result);
    }

    println!(
        "{}",
        header(&format!(
            "\"{}\": {}",
            result.query.term,
            plural(result.total_results, "chapter")
        ))
    );
    if result.is_empty() {
        println!("{}", dim("No chapters found."));
        return ExitCode::SUCCESS;
    }
    println!("{}", chapter_table(&result.chapters));
    println!(
        "{}",
        dim(&format!(
            "{} in total; {}",
            plural(result.total_verses(), "verse"),
            format_breakdown(&result.period_breakdown())
        ))
    );
    ExitCode::SUCCESS
}
