//! Word-level alignment of two strings.

use super::WordDiffAlgorithm;
use similar::{ChangeTag, TextDiff};

/// One step of a word diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordChange {
    /// Token present in both strings.
    Equal(String),
    /// Token only present in the old string.
    Delete(String),
    /// Token only present in the new string.
    Insert(String),
}

impl WordChange {
    /// The token text.
    pub fn text(&self) -> &str {
        match self {
            WordChange::Equal(text) | WordChange::Delete(text) | WordChange::Insert(text) => text,
        }
    }
}

/// Diff two strings at word granularity.
///
/// Words and whitespace runs are separate tokens, so replaying the
/// `Equal` and `Delete` changes in order yields `old` and replaying the
/// `Equal` and `Insert` changes yields `new`.
pub fn word_diff(old: &str, new: &str, algorithm: WordDiffAlgorithm) -> Vec<WordChange> {
    let diff = TextDiff::configure()
        .algorithm(algorithm.to_similar())
        .diff_words(old, new);

    diff.iter_all_changes()
        .map(|change| {
            let text = change.value().to_string();
            match change.tag() {
                ChangeTag::Equal => WordChange::Equal(text),
                ChangeTag::Delete => WordChange::Delete(text),
                ChangeTag::Insert => WordChange::Insert(text),
            }
        })
        .collect()
}
