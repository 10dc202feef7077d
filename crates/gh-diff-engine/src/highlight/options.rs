//! Explicit knobs for inline highlighting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequence alignment used for the word-level diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordDiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl WordDiffAlgorithm {
    pub(crate) fn to_similar(self) -> similar::Algorithm {
        match self {
            WordDiffAlgorithm::Myers => similar::Algorithm::Myers,
            WordDiffAlgorithm::Patience => similar::Algorithm::Patience,
            WordDiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }

    /// All supported algorithm names.
    pub fn names() -> &'static [&'static str] {
        &["myers", "patience", "lcs"]
    }
}

impl fmt::Display for WordDiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordDiffAlgorithm::Myers => "myers",
            WordDiffAlgorithm::Patience => "patience",
            WordDiffAlgorithm::Lcs => "lcs",
        };
        f.write_str(name)
    }
}

impl FromStr for WordDiffAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "myers" => Ok(WordDiffAlgorithm::Myers),
            "patience" => Ok(WordDiffAlgorithm::Patience),
            "lcs" => Ok(WordDiffAlgorithm::Lcs),
            other => Err(format!(
                "unknown word diff algorithm '{}' (expected one of: {})",
                other,
                Self::names().join(", ")
            )),
        }
    }
}

/// Options for [`compute_inline_highlights_with`](crate::compute_inline_highlights_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightOptions {
    /// Alignment algorithm for the word diff.
    #[serde(default)]
    pub algorithm: WordDiffAlgorithm,
    /// Pairs where either line is longer than this (in bytes) are marked as
    /// changed in full instead of being word-diffed.
    #[serde(default)]
    pub max_line_length: Option<usize>,
}

impl HighlightOptions {
    /// Use a specific alignment algorithm.
    pub fn with_algorithm(mut self, algorithm: WordDiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Skip the word diff for lines longer than `limit` bytes.
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = Some(limit);
        self
    }
}
