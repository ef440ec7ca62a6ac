//! Command-line interface for the `mushaf` corpus tool.

use std::process::ExitCode;

use clap::Parser;
use mushaf::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    // `init` must work even when an existing config file is invalid.
    let loaded = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(cli.global),
        _ => CommandContext::load(cli.global),
    };
    let mut ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
