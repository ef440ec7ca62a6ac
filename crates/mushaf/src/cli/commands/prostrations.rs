//! Implementation of `mushaf prostrations`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;

use crate::cli::{
    context::CommandContext,
    output::{plural, print_json, print_verse_listing},
};

/// Lists every verse marked for prostration.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let result = engine.prostration_verses();
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => {
            let title = format!(
                "Prostrations: {}",
                plural(result.total_results, "verse")
            );
            print_verse_listing(&title, &result.verses, &result.period_breakdown());
            ExitCode::SUCCESS
        }
    }
}
