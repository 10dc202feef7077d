//! Pair a deletion with the addition right after it and mark the words
//! that differ.

use super::{word_diff, HighlightOptions, WordChange};
use crate::model::{DiffLine, DiffSegment, LineKind};

/// Annotate paired deletion/addition lines with word-level segments,
/// using the default [`HighlightOptions`].
///
/// # Example
/// ```
/// use gh_diff_engine::{compute_inline_highlights, DiffLine};
///
/// let lines = compute_inline_highlights(vec![
///     DiffLine::deletion("const foo = 1", 3),
///     DiffLine::addition("const bar = 1", 3),
/// ]);
/// let old = lines[0].segments().unwrap();
/// assert!(old.iter().any(|s| s.text == "foo" && s.changed));
/// ```
pub fn compute_inline_highlights(lines: Vec<DiffLine>) -> Vec<DiffLine> {
    compute_inline_highlights_with(lines, &HighlightOptions::default())
}

/// Annotate paired deletion/addition lines with word-level segments.
///
/// A deletion is paired only with an addition that directly follows it.
/// Both lines of a pair are consumed, so in `[-, -, +, +]` only the second
/// deletion and the first addition get segments. All other lines are
/// passed through untouched and the output has the same length as the
/// input.
pub fn compute_inline_highlights_with(
    lines: Vec<DiffLine>,
    options: &HighlightOptions,
) -> Vec<DiffLine> {
    let mut result = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        if line.kind() != LineKind::Remove {
            result.push(line);
            continue;
        }

        match iter.next_if(|next| next.kind() == LineKind::Add) {
            Some(added) => {
                let (old_segments, new_segments) =
                    pair_segments(line.content(), added.content(), options);
                result.push(line.with_segments(old_segments));
                result.push(added.with_segments(new_segments));
            }
            None => result.push(line),
        }
    }

    result
}

/// Build the segments for both sides of a pair.
fn pair_segments(
    old: &str,
    new: &str,
    options: &HighlightOptions,
) -> (Vec<DiffSegment>, Vec<DiffSegment>) {
    if let Some(limit) = options.max_line_length {
        if old.len() > limit || new.len() > limit {
            log::trace!(
                "Line pair exceeds {} bytes, marking whole lines as changed",
                limit
            );
            return (whole_line(old), whole_line(new));
        }
    }

    let mut old_segments = Vec::new();
    let mut new_segments = Vec::new();

    for change in word_diff(old, new, options.algorithm) {
        match change {
            WordChange::Equal(text) => {
                push_segment(&mut old_segments, &text, false);
                push_segment(&mut new_segments, &text, false);
            }
            WordChange::Delete(text) => push_segment(&mut old_segments, &text, true),
            WordChange::Insert(text) => push_segment(&mut new_segments, &text, true),
        }
    }

    (old_segments, new_segments)
}

fn whole_line(text: &str) -> Vec<DiffSegment> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![DiffSegment::changed(text)]
    }
}

/// Append a token, merging it into the previous segment when both share
/// the same `changed` flag.
fn push_segment(segments: &mut Vec<DiffSegment>, text: &str, changed: bool) {
    match segments.last_mut() {
        Some(last) if last.changed == changed => last.text.push_str(text),
        _ => segments.push(DiffSegment {
            text: text.to_string(),
            changed,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_diff;
    use crate::WordDiffAlgorithm;
    use pretty_assertions::assert_eq;

    fn joined(line: &DiffLine) -> Option<String> {
        line.segments()
            .map(|segments| segments.iter().map(|s| s.text.as_str()).collect())
    }

    fn has_segments(lines: &[DiffLine]) -> Vec<bool> {
        lines.iter().map(|l| l.segments().is_some()).collect()
    }

    #[test]
    fn test_word_change_in_pair() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("const foo = 1", 1),
            DiffLine::addition("const bar = 1", 1),
        ]);

        assert_eq!(
            lines[0].segments().unwrap(),
            &[
                DiffSegment::unchanged("const "),
                DiffSegment::changed("foo"),
                DiffSegment::unchanged(" = 1"),
            ]
        );
        assert_eq!(
            lines[1].segments().unwrap(),
            &[
                DiffSegment::unchanged("const "),
                DiffSegment::changed("bar"),
                DiffSegment::unchanged(" = 1"),
            ]
        );
    }

    #[test]
    fn test_greedy_pairing_of_runs() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("a", 1),
            DiffLine::deletion("b", 2),
            DiffLine::addition("c", 1),
            DiffLine::addition("d", 2),
        ]);

        assert_eq!(has_segments(&lines), vec![false, true, true, false]);
    }

    #[test]
    fn test_remove_add_add() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("x = 1", 1),
            DiffLine::addition("x = 2", 1),
            DiffLine::addition("y = 3", 2),
        ]);

        assert_eq!(has_segments(&lines), vec![true, true, false]);
    }

    #[test]
    fn test_alternating_pairs() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("one", 1),
            DiffLine::addition("uno", 1),
            DiffLine::deletion("two", 2),
            DiffLine::addition("dos", 2),
        ]);

        assert_eq!(has_segments(&lines), vec![true, true, true, true]);
    }

    #[test]
    fn test_lone_remove_before_context() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("gone", 4),
            DiffLine::context("kept", 5, 4),
        ]);

        assert_eq!(has_segments(&lines), vec![false, false]);
    }

    #[test]
    fn test_add_before_remove_is_not_paired() {
        let lines = compute_inline_highlights(vec![
            DiffLine::addition("new", 1),
            DiffLine::deletion("old", 1),
        ]);

        assert_eq!(has_segments(&lines), vec![false, false]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(compute_inline_highlights(Vec::new()).is_empty());

        let single = vec![DiffLine::deletion("only", 1)];
        assert_eq!(compute_inline_highlights(single.clone()), single);
    }

    #[test]
    fn test_no_changes_returns_input_unchanged() {
        let input = vec![
            DiffLine::header("@@ -1,2 +1,2 @@"),
            DiffLine::context("a", 1, 1),
            DiffLine::context("b", 2, 2),
        ];

        assert_eq!(compute_inline_highlights(input.clone()), input);
    }

    #[test]
    fn test_line_numbers_preserved() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("old content", 42),
            DiffLine::addition("new content", 42),
        ]);

        assert_eq!(lines[0].old_line_number(), Some(42));
        assert_eq!(lines[0].new_line_number(), None);
        assert_eq!(lines[1].new_line_number(), Some(42));
        assert_eq!(lines[1].old_line_number(), None);
    }

    #[test]
    fn test_empty_sides() {
        let lines = compute_inline_highlights(vec![
            DiffLine::deletion("", 1),
            DiffLine::addition("fresh text", 1),
        ]);

        assert_eq!(lines[0].segments(), Some(&[][..]));
        assert_eq!(
            lines[1].segments().unwrap(),
            &[DiffSegment::changed("fresh text")]
        );
    }

    #[test]
    fn test_max_line_length_marks_whole_line() {
        let options = HighlightOptions::default().with_max_line_length(5);
        let lines = compute_inline_highlights_with(
            vec![
                DiffLine::deletion("const foo = 1", 1),
                DiffLine::addition("const bar = 1", 1),
            ],
            &options,
        );

        assert_eq!(
            lines[0].segments().unwrap(),
            &[DiffSegment::changed("const foo = 1")]
        );
        assert_eq!(
            lines[1].segments().unwrap(),
            &[DiffSegment::changed("const bar = 1")]
        );
    }

    #[test]
    fn test_parsed_patch_invariants() {
        let patch = "@@ -1,9 +1,9 @@ fn main() {\n fn main() {\n-    let name = \"world\";\n+    let name = \"there\";\n     println!(\"hello\");\n-    a();\n-    b();\n+    c();\n+    d();\n-    tail\n }\n";
        let parsed = parse_diff(patch);

        for algorithm in [
            WordDiffAlgorithm::Myers,
            WordDiffAlgorithm::Patience,
            WordDiffAlgorithm::Lcs,
        ] {
            let options = HighlightOptions::default().with_algorithm(algorithm);
            let lines = compute_inline_highlights_with(parsed.clone(), &options);

            assert_eq!(lines.len(), parsed.len());
            for (before, after) in parsed.iter().zip(&lines) {
                assert_eq!(before.kind(), after.kind());
                assert_eq!(before.content(), after.content());
                assert_eq!(before.old_line_number(), after.old_line_number());
                assert_eq!(before.new_line_number(), after.new_line_number());

                if let Some(text) = joined(after) {
                    assert_eq!(text, after.content());
                }
                if matches!(after.kind(), LineKind::Header | LineKind::Context) {
                    assert!(after.segments().is_none());
                }
            }

            // header, ctx, -, +, ctx, -, -, +, +, -, ctx
            assert_eq!(
                has_segments(&lines),
                vec![false, false, true, true, false, false, true, true, false, false, false]
            );
        }
    }
}
