//! Configuration system for mushaf.
//!
//! mushaf uses TOML configuration files named `.mushaf.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.mushaf.toml` files found, then loading `~/.mushaf.toml` as the global config with lowest
//! precedence.
//!
//! The corpus library reads no configuration itself. Configuration only selects the document
//! path, strictness and random mode an application hands to the corpus and query crates.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;
pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawOutputSettings, RawQuerySettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_corpus_path;
use serde::{Deserialize, Serialize};
pub use templates::ConfigScope;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for mushaf.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.mushaf.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Corpus document settings.
    pub corpus: CorpusSettings,
    /// Query behavior settings.
    pub query: QuerySettings,
    /// Output rendering settings.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.mushaf.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.mushaf.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.mushaf.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks that a corpus path is configured and points at an existing file.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.mushaf.toml` file, with the corpus path
    /// already resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            corpus: &self.corpus,
            query: &self.query,
            output: &self.output,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Corpus document settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Resolved path to the corpus document.
    pub path: Option<PathBuf>,
    /// Whether to reject corpora that fail structural validation at load time.
    pub strict: bool,
}

/// Query behavior settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Random verse selection strategy.
    pub random: RandomSelection,
}

/// Output rendering settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format.
    pub format: OutputFormat,
}

/// How a random verse is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomSelection {
    /// Pick a chapter uniformly, then a verse within it.
    #[default]
    Chapter,
    /// Pick uniformly across every verse.
    Uniform,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Serialized result objects.
    Json,
}

/// Borrowed settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Corpus document settings.
    corpus: &'a CorpusSettings,
    /// Query behavior settings.
    query: &'a QuerySettings,
    /// Output rendering settings.
    output: &'a OutputSettings,
}

/// Formats a path for display, relative to `base` when that reads better.
///
/// Paths inside `base` are shown relative to it, paths under the home directory are shown
/// with a `~/` prefix, and anything else is shown as-is.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && let Some(relative) = pathdiff::diff_paths(path, base)
        && !relative
            .components()
            .any(|component| component == Component::ParentDir)
    {
        if relative.as_os_str().is_empty() {
            return ".".to_string();
        }
        return relative.display().to_string();
    }

    if let Some(dirs) = BaseDirs::new()
        && let Ok(rest) = path.strip_prefix(dirs.home_dir())
    {
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
