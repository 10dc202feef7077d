//! Application configuration
//!
//! Configuration loaded from `.gh-diff.toml`.

use anyhow::{Context, Result};
use gh_diff_engine::{HighlightOptions, WordDiffAlgorithm};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How the annotated lines are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON array of line records.
    #[default]
    Json,
    /// Indented JSON array of line records.
    PrettyJson,
    /// One summary line with line counts.
    Stats,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::PrettyJson => "pretty-json",
            OutputFormat::Stats => "stats",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty-json" | "pretty" => Ok(OutputFormat::PrettyJson),
            "stats" => Ok(OutputFormat::Stats),
            other => Err(format!(
                "unknown output format '{}' (expected json, pretty-json or stats)",
                other
            )),
        }
    }
}

/// Application configuration loaded from .gh-diff.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Output format when none is given on the command line
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Compute word-level highlights for paired lines
    #[serde(default = "default_inline_highlights")]
    pub inline_highlights: bool,

    /// Alignment algorithm for the word diff
    #[serde(default)]
    pub word_diff_algorithm: WordDiffAlgorithm,

    /// Lines longer than this are highlighted as a whole
    #[serde(default)]
    pub max_line_length: Option<usize>,

    /// Write logs to a timestamped file in the cache directory instead of stderr
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_inline_highlights() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            inline_highlights: default_inline_highlights(),
            word_diff_algorithm: WordDiffAlgorithm::default(),
            max_line_length: None,
            log_to_file: false,
        }
    }
}

/// Outcome of looking up and parsing the config file.
///
/// Call [`LoadedConfig::log`] once the logger is initialized.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The effective config (defaults if nothing usable was found).
    pub config: AppConfig,
    /// File the config was read from.
    pub path: Option<PathBuf>,
    /// Parse error for `path`, in which case `config` holds the defaults.
    pub error: Option<toml::de::Error>,
}

impl LoadedConfig {
    /// Config read from `path` without errors.
    pub fn from_file(path: PathBuf, config: AppConfig) -> Self {
        Self {
            config,
            path: Some(path),
            error: None,
        }
    }

    /// Warning message for a config file that could not be parsed.
    pub fn warning(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let error = self.error.as_ref()?;
        Some(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            error
        ))
    }

    /// Log where the config came from.
    pub fn log(&self) {
        if let Some(warning) = self.warning() {
            log::warn!("{}", warning);
            log::debug!("Using default app config");
        } else if let Some(path) = &self.path {
            log::info!("Loaded app config from {}", path.display());
        } else {
            log::debug!("Using default app config");
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then the config
    /// directory, or use defaults
    pub fn load() -> LoadedConfig {
        match crate::load_config_file() {
            Some((path, content)) => Self::parse_or_default(path, &content),
            None => LoadedConfig {
                config: Self::default(),
                path: None,
                error: None,
            },
        }
    }

    /// Parse config file content, falling back to defaults on error.
    pub fn parse_or_default(path: PathBuf, content: &str) -> LoadedConfig {
        match toml::from_str(content) {
            Ok(config) => LoadedConfig::from_file(path, config),
            Err(e) => LoadedConfig {
                config: Self::default(),
                path: Some(path),
                error: Some(e),
            },
        }
    }

    /// Load config from an explicit path. Unlike [`AppConfig::load`], a
    /// missing or invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Highlight options derived from this config.
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            algorithm: self.word_diff_algorithm,
            max_line_length: self.max_line_length,
        }
    }
}
