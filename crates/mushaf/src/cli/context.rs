//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mushaf_config::{Config, OutputFormat, RandomSelection};
use mushaf_corpus::CorpusStore;
use mushaf_query::{QueryEngine, RandomMode};

use crate::cli::args::GlobalArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Flags given on the command line.
    pub args: GlobalArgs,
    /// Engine over the loaded corpus, built on first use.
    engine: Option<QueryEngine>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(args: GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            args,
            engine: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(args: GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            args,
            engine: None,
        })
    }

    /// Returns the output format: `--json` wins over the configured default.
    pub fn output_format(&self) -> OutputFormat {
        if self.args.json {
            OutputFormat::Json
        } else {
            self.config.output.format
        }
    }

    /// Returns the corpus document path: `--corpus` wins over configuration.
    pub fn corpus_path(&self) -> Option<PathBuf> {
        match &self.args.corpus {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => Some(self.cwd.join(path)),
            None => self.config.corpus.path.clone(),
        }
    }

    /// Builds a store for the configured corpus, or exits with a hint if none is set.
    ///
    /// `strict` requests structural validation at load time on top of `--strict` and the
    /// `[corpus] strict` setting.
    pub fn store(&self, strict: bool) -> Result<CorpusStore, ExitCode> {
        let Some(path) = self.corpus_path() else {
            eprintln!("error: no corpus document configured");
            eprintln!(
                "Pass --corpus PATH, or run 'mushaf init' and set [corpus] path in .mushaf.toml."
            );
            return Err(ExitCode::FAILURE);
        };
        let strict = strict || self.args.strict || self.config.corpus.strict;
        Ok(CorpusStore::from_path(path).strict(strict))
    }

    /// Returns the query engine, loading the corpus on first use.
    pub fn engine(&mut self) -> Result<&QueryEngine, ExitCode> {
        if self.engine.is_none() {
            let store = self.store(false)?;
            let engine = QueryEngine::from_store(&store).map_err(|e| {
                eprintln!("error: failed to load corpus: {e}");
                ExitCode::FAILURE
            })?;
            self.engine = Some(engine.with_random_mode(random_mode(self.config.query.random)));
        }
        self.engine.as_ref().ok_or(ExitCode::FAILURE)
    }
}

/// Maps the configured selection strategy onto the engine's.
pub fn random_mode(selection: RandomSelection) -> RandomMode {
    match selection {
        RandomSelection::Chapter => RandomMode::ChapterWeighted,
        RandomSelection::Uniform => RandomMode::Uniform,
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
