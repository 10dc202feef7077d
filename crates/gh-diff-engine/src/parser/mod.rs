//! Diff parsing.

mod unified;

pub use unified::{parse_diff, parse_hunk_header, HunkRange};
