//! Command line arguments and how they combine with the config file.

use clap::{ArgAction, Parser};
use gh_diff_config::{AppConfig, OutputFormat};
use gh_diff_engine::WordDiffAlgorithm;
use std::path::PathBuf;

/// Parse a unified-diff patch and print line records with word-level highlights.
#[derive(Debug, Parser)]
#[command(name = "gh-diff", version, about)]
pub struct Cli {
    /// Patch file to read; `-` or nothing reads stdin
    #[arg(value_name = "PATCH")]
    pub patch: Option<PathBuf>,

    /// Output format: json, pretty-json or stats
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Word diff algorithm: myers, patience or lcs
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<WordDiffAlgorithm>,

    /// Skip word-level highlighting
    #[arg(long)]
    pub no_highlight: bool,

    /// Highlight lines longer than this many bytes as a whole
    #[arg(long, value_name = "BYTES")]
    pub max_line_length: Option<usize>,

    /// Config file to use instead of the default lookup
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to a file in the cache directory
    #[arg(long)]
    pub log_file: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn merge_into(&self, mut config: AppConfig) -> AppConfig {
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(algorithm) = self.algorithm {
            config.word_diff_algorithm = algorithm;
        }
        if self.no_highlight {
            config.inline_highlights = false;
        }
        if let Some(limit) = self.max_line_length {
            config.max_line_length = Some(limit);
        }
        if self.log_file {
            config.log_to_file = true;
        }
        config
    }
}
