//! Configuration file parsing.
//!
//! Parses individual `.mushaf.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, OutputFormat, RandomSelection};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Corpus document section.
    pub corpus: Option<RawCorpusSettings>,
    /// Query behavior section.
    pub query: Option<RawQuerySettings>,
    /// Output rendering section.
    pub output: Option<RawOutputSettings>,
}

/// Raw corpus settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCorpusSettings {
    /// Path to the corpus document, as written in the file.
    pub path: Option<String>,
    /// Whether to reject corpora that fail structural validation.
    pub strict: Option<bool>,
}

/// Raw query settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawQuerySettings {
    /// Random verse selection strategy.
    pub random: Option<RandomSelection>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawOutputSettings {
    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.corpus.is_none());
        assert!(config.query.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[corpus]
path = "data/mushaf.json"
strict = true

[query]
random = "uniform"

[output]
format = "json"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let corpus = config.corpus.unwrap();
        assert_eq!(corpus.path.as_deref(), Some("data/mushaf.json"));
        assert_eq!(corpus.strict, Some(true));
        assert_eq!(config.query.unwrap().random, Some(RandomSelection::Uniform));
        assert_eq!(config.output.unwrap().format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_partial_section() {
        let toml = r#"
[corpus]
strict = false
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let corpus = config.corpus.unwrap();
        assert!(corpus.path.is_none());
        assert_eq!(corpus.strict, Some(false));
    }

    #[test]
    fn test_parse_rejects_unknown_random_mode() {
        let toml = r#"
[query]
random = "weighted"
"#;
        let err = parse_config_str(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let toml = r#"
[corpus]
file = "mushaf.json"
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[corpus\npath = 1", Path::new("broken.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_config_file(Path::new("/nonexistent/.mushaf.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
