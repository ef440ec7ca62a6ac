//! Diagnostic logging for the CLI.

use std::io;

use tracing::Level;

/// Maps the `-v` count to the most verbose level that is printed.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr subscriber so library events reach the terminal.
///
/// Stdout stays reserved for command output, which keeps `--json` output parseable.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
