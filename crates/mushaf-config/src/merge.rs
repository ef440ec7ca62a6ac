//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, CorpusSettings, OutputSettings, QuerySettings, parse::RawConfig,
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Returns the directory holding the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every setting the first defined value wins.
/// A corpus path is resolved against the directory of the file that defines it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    Ok(Config {
        corpus: merge_corpus_settings(configs)?,
        query: merge_query_settings(configs),
        output: merge_output_settings(configs),
        config_root: configs.first().map(|c| c.dir().to_path_buf()),
    })
}

/// Merges corpus settings, resolving the winning path.
fn merge_corpus_settings(configs: &[ParsedConfig]) -> Result<CorpusSettings, ConfigError> {
    let mut result = CorpusSettings::default();

    let path_source = configs.iter().find_map(|parsed| {
        let path = parsed.config.corpus.as_ref()?.path.as_deref()?;
        Some((path, parsed.dir()))
    });
    if let Some((path, dir)) = path_source {
        result.path = Some(resolve_corpus_path(path, dir)?);
    }

    if let Some(strict) = configs
        .iter()
        .find_map(|parsed| parsed.config.corpus.as_ref()?.strict)
    {
        result.strict = strict;
    }

    Ok(result)
}

/// Merges query settings.
fn merge_query_settings(configs: &[ParsedConfig]) -> QuerySettings {
    let mut result = QuerySettings::default();
    if let Some(random) = configs
        .iter()
        .find_map(|parsed| parsed.config.query.as_ref()?.random)
    {
        result.random = random;
    }
    result
}

/// Merges output settings.
fn merge_output_settings(configs: &[ParsedConfig]) -> OutputSettings {
    let mut result = OutputSettings::default();
    if let Some(format) = configs
        .iter()
        .find_map(|parsed| parsed.config.output.as_ref()?.format)
    {
        result.format = format;
    }
    result
}
