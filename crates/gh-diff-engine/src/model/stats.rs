//! Summary counts over a parsed patch.

use super::DiffLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line statistics for a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of hunk headers.
    pub hunks: usize,
    /// Number of added lines.
    pub additions: usize,
    /// Number of deleted lines.
    pub deletions: usize,
    /// Number of remove/add pairs that carry word-level segments.
    pub paired: usize,
}

impl DiffStats {
    /// Recalculate statistics from a sequence of lines.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line {
                DiffLine::Header { .. } => stats.hunks += 1,
                DiffLine::Add { segments, .. } => {
                    stats.additions += 1;
                    // every highlighted pair has exactly one highlighted addition
                    if segments.is_some() {
                        stats.paired += 1;
                    }
                }
                DiffLine::Remove { .. } => stats.deletions += 1,
                DiffLine::Context { .. } => {}
            }
        }
        stats
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hunks={} additions={} deletions={} paired={}",
            self.hunks, self.additions, self.deletions, self.paired
        )
    }
}
