//! Word-level highlighting of paired deletion/addition lines.

mod inline;
mod options;
mod words;

pub use inline::{compute_inline_highlights, compute_inline_highlights_with};
pub use options::{HighlightOptions, WordDiffAlgorithm};
pub use words::{word_diff, WordChange};
