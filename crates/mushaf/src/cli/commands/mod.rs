//! Command implementations and dispatch.

pub mod chapter;
pub mod check;
pub mod config;
pub mod divisions;
pub mod init;
pub mod names;
pub mod prostrations;
pub mod random;
pub mod range;
pub mod search;
pub mod stats;
pub mod verse;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Verse(cmd) => verse::run(ctx, &cmd),
        Commands::Chapter(cmd) => chapter::run(ctx, &cmd),
        Commands::Range(cmd) => range::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Names(cmd) => names::run(ctx, &cmd),
        Commands::Juz(cmd) => divisions::juz(ctx, &cmd),
        Commands::Hizb(cmd) => divisions::hizb(ctx, &cmd),
        Commands::Prostrations => prostrations::run(ctx),
        Commands::Random(cmd) => random::run(ctx, &cmd),
        Commands::Stats => stats::run(ctx),
        Commands::Check => check::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
