//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No corpus document path is configured.
    NoCorpusPath,
    /// The corpus path does not exist.
    CorpusPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The corpus path exists but is not a file.
    CorpusPathNotFile {
        /// Path that is not a file.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCorpusPath => write!(f, "no corpus path is configured"),
            Self::CorpusPathMissing { path } => {
                write!(f, "corpus path does not exist: {path}")
            }
            Self::CorpusPathNotFile { path } => {
                write!(f, "corpus path is not a file: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let Some(path) = &config.corpus.path else {
        return vec![ConfigWarning::NoCorpusPath];
    };

    if !path.exists() {
        return vec![ConfigWarning::CorpusPathMissing {
            path: path.display().to_string(),
        }];
    }
    if !path.is_file() {
        return vec![ConfigWarning::CorpusPathNotFile {
            path: path.display().to_string(),
        }];
    }
    Vec::new()
}
