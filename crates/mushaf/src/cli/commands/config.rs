//! Implementation of `mushaf config`.

use std::process::ExitCode;

use mushaf_config::{ConfigWarning, discover_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, effective settings and validation warnings.
///
/// Exits with failure when the configuration has warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    let config_files = discover_config_files(cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none found)"));
    } else {
        for path in &config_files {
            println!("   {}", format_path_for_display(path, Some(cwd)));
        }
    }
    println!();

    let settings = match config.settings_to_toml() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", subheader("Effective settings:"));
    for line in settings.lines() {
        println!("   {line}");
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();
    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoCorpusPath => {
                println!(
                    "{}",
                    dim("Hint: set [corpus] path in .mushaf.toml or pass --corpus")
                );
            }
            ConfigWarning::CorpusPathMissing { .. } | ConfigWarning::CorpusPathNotFile { .. } => {
                println!(
                    "{}",
                    dim("Hint: paths resolve against the directory of the defining config file")
                );
            }
        }
    }
}
