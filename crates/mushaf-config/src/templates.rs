//! Starter files written by `mushaf init`.
//!
//! Each scope ships an example that is valid TOML and documents every setting. The file
//! handed to the user has its settings disabled, so a fresh file changes nothing until edited.

use std::borrow::Cow;

/// Where a starter configuration file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `.mushaf.toml` in the current directory.
    Local,
    /// `~/.mushaf.toml`, read with the lowest precedence.
    Global,
}

impl ConfigScope {
    /// Returns the example with every setting active.
    pub fn example(self) -> &'static str {
        match self {
            Self::Local => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }

    /// Returns the starter file: the example with each setting and table header disabled.
    pub fn starter(self) -> String {
        let mut starter: String = self
            .example()
            .lines()
            .map(disable_setting)
            .collect::<Vec<_>>()
            .join("\n");
        starter.push('\n');
        starter
    }
}

/// Turns a setting or table header into a comment. Comments and blank lines pass through.
fn disable_setting(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("# {line}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    const SCOPES: [ConfigScope; 2] = [ConfigScope::Local, ConfigScope::Global];

    #[test]
    fn examples_set_every_section() {
        for scope in SCOPES {
            let config = parse_config(scope.example())
                .unwrap_or_else(|e| panic!("{scope:?} example is not valid TOML: {e}"));
            assert!(config.corpus.is_some_and(|c| c.path.is_some()));
            assert!(config.query.is_some_and(|q| q.random.is_some()));
            assert!(config.output.is_some_and(|o| o.format.is_some()));
        }
    }

    #[test]
    fn starters_define_nothing() {
        for scope in SCOPES {
            let config = parse_config(&scope.starter()).unwrap();
            assert!(config.root.is_none());
            assert!(config.corpus.is_none());
            assert!(config.query.is_none());
            assert!(config.output.is_none());
        }
    }

    #[test]
    fn starter_keeps_documentation_and_shows_settings() {
        let starter = ConfigScope::Local.starter();
        assert!(starter.starts_with("# mushaf configuration\n"));
        assert!(starter.contains("\n# [corpus]\n"));
        assert!(starter.contains("\n# random = \"chapter\"\n"));
        assert_eq!(
            starter.lines().count(),
            ConfigScope::Local.example().lines().count()
        );
    }

    #[test]
    fn global_example_uses_home_relative_corpus() {
        let config = parse_config(ConfigScope::Global.example()).unwrap();
        let path = config.corpus.and_then(|c| c.path).unwrap();
        assert!(path.starts_with("~/"));
    }

    #[test]
    fn disabling_lines() {
        assert_eq!(disable_setting("strict = false"), "# strict = false");
        assert_eq!(disable_setting("[output]"), "# [output]");
        assert_eq!(disable_setting("  # note"), "  # note");
        assert_eq!(disable_setting(""), "");
    }
}
