//! Implementation of `mushaf random`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;
use mushaf_query::RandomMode;
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::cli::{
    args::RandomCommand,
    context::CommandContext,
    output::{print_json, query_failed},
};

use super::verse::print_verse;

/// Shows a randomly chosen verse.
pub fn run(ctx: &mut CommandContext, cmd: &RandomCommand) -> ExitCode {
    let format = ctx.output_format();
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let mode = if cmd.uniform {
        RandomMode::Uniform
    } else {
        engine.random_mode()
    };
    debug!(?mode, seed = ?cmd.seed, "drawing random verse");

    let engine = engine.clone().with_random_mode(mode);
    let picked = match cmd.seed {
        Some(seed) => engine.random_verse_with(&mut StdRng::seed_from_u64(seed)),
        None => engine.random_verse(),
    };
    let verse = match picked {
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
