//! # gh-diff-engine
//!
//! Turns the `patch` text GitHub returns for a pull request file into line
//! records a renderer can draw, with word-level highlighting for lines that
//! were modified in place.
//!
//! ## Pipeline
//!
//! 1. [`parse_diff`] splits a unified-diff hunk body into [`DiffLine`]s with
//!    old/new line numbers.
//! 2. [`compute_inline_highlights`] pairs each deletion that is directly
//!    followed by an addition and attaches [`DiffSegment`]s to both lines.
//!
//! Both steps are pure and infallible: unknown lines are dropped and a
//! malformed hunk header keeps the previous line counters.
//!
//! ## Usage
//!
//! ```rust
//! use gh_diff_engine::{compute_inline_highlights, parse_diff, DiffStats};
//!
//! let patch = "@@ -1,2 +1,2 @@\n fn main() {\n-    run(1);\n+    run(2);\n";
//! let lines = compute_inline_highlights(parse_diff(patch));
//!
//! let stats = DiffStats::from_lines(&lines);
//! assert_eq!(stats.paired, 1);
//! ```

pub mod highlight;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use highlight::{
    compute_inline_highlights, compute_inline_highlights_with, word_diff, HighlightOptions,
    WordChange, WordDiffAlgorithm,
};
pub use model::{DiffLine, DiffSegment, DiffStats, LineKind};
pub use parser::{parse_diff, parse_hunk_header, HunkRange};

/// Parse a patch and compute inline highlights in one go.
pub fn highlight_patch(patch: &str, options: &HighlightOptions) -> Vec<DiffLine> {
    let lines = parse_diff(patch);
    log::debug!("Parsed {} diff lines", lines.len());
    compute_inline_highlights_with(lines, options)
}
