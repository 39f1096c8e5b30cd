//! letter_options: `letter.json` parsing and driver options.
//!
//! A config file sets defaults for the `letter` command; flags given on the
//! command line override it. Every field is optional, and [`LetterConfig::resolve`]
//! fills whatever is still unset with the built-in defaults.

#![allow(unused_assignments)]

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name searched for by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "letter.json";

/// Default indentation width for `source` output.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// What the driver prints for each parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON serialization of the AST.
    #[default]
    Ast,
    /// The s-expression encoding.
    Sexp,
    /// Formatted Letter source.
    Source,
    /// The token stream, one token per line.
    Tokens,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Ast, Self::Sexp, Self::Source, Self::Tokens];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ast => "ast",
            Self::Sexp => "sexp",
            Self::Source => "source",
            Self::Tokens => "tokens",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

/// The `letter.json` file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterConfig {
    pub output: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub indent_width: Option<usize>,
    pub files: Option<Vec<String>>,
}

impl LetterConfig {
    /// Layer `overrides` on top of this config; any field set in `overrides` wins.
    #[must_use]
    pub fn merged_with(self, overrides: LetterConfig) -> LetterConfig {
        LetterConfig {
            output: overrides.output.or(self.output),
            pretty: overrides.pretty.or(self.pretty),
            indent_width: overrides.indent_width.or(self.indent_width),
            files: overrides.files.or(self.files),
        }
    }

    /// Fill unset fields with defaults.
    ///
    /// Relative entries in `files` are joined onto `base_dir`, which is the
    /// directory holding the config file.
    pub fn resolve(&self, base_dir: Option<&Path>) -> ResolvedOptions {
        let files = self
            .files
            .iter()
            .flatten()
            .map(|file| match base_dir {
                Some(dir) if Path::new(file).is_relative() => dir.join(file),
                _ => PathBuf::from(file),
            })
            .collect();

        ResolvedOptions {
            output: self.output.unwrap_or_default(),
            pretty: self.pretty.unwrap_or(true),
            indent_width: self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH),
            files,
        }
    }
}

/// Options with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub output: OutputFormat,
    pub pretty: bool,
    pub indent_width: usize,
    pub files: Vec<PathBuf>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        LetterConfig::default().resolve(None)
    }
}

/// Failure to load or interpret a config file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(letter::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    #[diagnostic(code(letter::config::json))]
    Json(#[from] serde_json::Error),

    #[error("unknown output format '{0}'")]
    #[diagnostic(code(letter::config::format), help("expected one of: ast, sexp, source, tokens"))]
    UnknownFormat(String),
}

/// Parse a `letter.json` file from a string.
pub fn parse_config(content: &str) -> Result<LetterConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a `letter.json` file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<LetterConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Search `start_dir` and its ancestors for a `letter.json`.
pub fn find_config(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    start_dir
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_names() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
            assert_eq!(format.to_string(), format.as_str());
        }
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Err(ConfigError::UnknownFormat(name)) if name == "json"
        ));
    }

    #[test]
    fn merge_prefers_overrides() {
        let file = LetterConfig {
            output: Some(OutputFormat::Sexp),
            pretty: Some(false),
            indent_width: Some(2),
            files: Some(vec!["a.letter".to_string()]),
        };
        let flags = LetterConfig {
            output: Some(OutputFormat::Source),
            ..LetterConfig::default()
        };
        let merged = file.merged_with(flags);
        assert_eq!(merged.output, Some(OutputFormat::Source));
        assert_eq!(merged.pretty, Some(false));
        assert_eq!(merged.indent_width, Some(2));
        assert_eq!(merged.files, Some(vec!["a.letter".to_string()]));
    }

    #[test]
    fn resolve_defaults() {
        let resolved = ResolvedOptions::default();
        assert_eq!(resolved.output, OutputFormat::Ast);
        assert!(resolved.pretty);
        assert_eq!(resolved.indent_width, 4);
        assert!(resolved.files.is_empty());
    }

    #[test]
    fn resolve_joins_relative_files() {
        let config = LetterConfig {
            files: Some(vec!["src/main.letter".to_string()]),
            ..LetterConfig::default()
        };
        let resolved = config.resolve(Some(Path::new("project")));
        assert_eq!(resolved.files, vec![Path::new("project").join("src/main.letter")]);

        let resolved = config.resolve(None);
        assert_eq!(resolved.files, vec![PathBuf::from("src/main.letter")]);
    }
}
