//! Clap argument definitions for the `mushaf` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mushaf")]
#[command(about = "Look up, search and summarize the mushaf corpus")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Global flags shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Corpus JSON document (overrides [corpus] path in .mushaf.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Reject a corpus that fails structural validation
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for `mushaf verse`.
#[derive(Args, Debug, Clone)]
pub struct VerseCommand {
    /// Chapter id (1-114)
    pub chapter: u16,
    /// Verse id within the chapter
    pub verse: u16,
}

/// Arguments for `mushaf chapter`.
#[derive(Args, Debug, Clone)]
pub struct ChapterCommand {
    /// Chapter id (1-114)
    pub id: u16,

    /// Show chapter details without its verses
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for `mushaf range`.
#[derive(Args, Debug, Clone)]
pub struct RangeCommand {
    /// Chapter id (1-114)
    pub chapter: u16,
    /// First verse
    pub start: u16,
    /// Last verse, inclusive
    pub end: u16,
}

/// Arguments for `mushaf search` and `mushaf names`.
#[derive(Args, Debug, Clone)]
pub struct TermCommand {
    /// Text to look for, matched as given
    pub term: String,
}

/// Arguments for `mushaf juz` and `mushaf hizb`.
#[derive(Args, Debug, Clone)]
pub struct DivisionCommand {
    /// Division number
    pub number: u8,
}

/// Arguments for `mushaf random`.
#[derive(Args, Debug, Clone)]
pub struct RandomCommand {
    /// Pick uniformly across all verses instead of chapter first
    #[arg(long)]
    pub uniform: bool,

    /// Seed for a reproducible pick
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for `mushaf init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.mushaf.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `mushaf` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show one verse
    #[command(after_help = "\
EXAMPLES:
  mushaf verse 1 1
  mushaf verse 2 255 --json")]
    Verse(VerseCommand),

    /// Show a chapter and its verses
    Chapter(ChapterCommand),

    /// Show consecutive verses of a chapter
    Range(RangeCommand),

    /// Find verses whose text contains a term (exact, case-sensitive)
    Search(TermCommand),

    /// Find chapters by name (Latin names ignore case)
    Names(TermCommand),

    /// List the verses of a Juz (1-30)
    Juz(DivisionCommand),

    /// List the verses of a Hizb (1-60)
    Hizb(DivisionCommand),

    /// List the verses marked for prostration
    Prostrations,

    /// Show a random verse
    Random(RandomCommand),

    /// Show chapter-length statistics
    Stats,

    /// Validate the corpus structure
    Check,

    /// Initialize mushaf configuration in current directory
    Init(InitCommand),

    /// Show configuration files and effective settings
    Config,
}
