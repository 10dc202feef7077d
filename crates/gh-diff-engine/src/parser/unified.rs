//! Parse unified diff hunks (as returned in the `patch` field of the GitHub API).

use crate::model::DiffLine;
use regex::Regex;
use std::sync::OnceLock;

/// Line ranges described by a `@@ -a,b +c,d @@` hunk header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkRange {
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in old version (1 when omitted).
    pub old_count: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in new version (1 when omitted).
    pub new_count: u32,
    /// Function context after the closing `@@`, if any.
    pub section: Option<String>,
}

/// Parse a hunk header such as `@@ -10,7 +10,6 @@ impl Foo {`.
///
/// Returns `None` if the line does not follow the unified-diff header shape
/// or a number does not fit into `u32`.
pub fn parse_hunk_header(line: &str) -> Option<HunkRange> {
    static HUNK_HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HUNK_HEADER_REGEX.get_or_init(|| {
        Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$").unwrap()
    });

    let captures = re.captures(line)?;
    let number = |idx: usize| -> Option<u32> {
        match captures.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    let section = captures
        .get(5)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(HunkRange {
        old_start: number(1)?,
        old_count: number(2)?,
        new_start: number(3)?,
        new_count: number(4)?,
        section,
    })
}

/// Parse a patch body into an ordered sequence of line records.
///
/// Only `@@`, `+`, `-` and ` ` prefixed lines produce records; everything
/// else (`\ No newline at end of file`, blank lines, git extended headers)
/// is dropped. A header that cannot be parsed is still emitted, but the line
/// counters keep running from their previous values.
///
/// # Example
/// ```
/// use gh_diff_engine::{parse_diff, LineKind};
///
/// let lines = parse_diff("@@ -1,2 +1,2 @@\n-old\n+new\n");
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1].kind(), LineKind::Remove);
/// assert_eq!(lines[2].new_line_number(), Some(1));
/// ```
pub fn parse_diff(patch: &str) -> Vec<DiffLine> {
    let mut lines = Vec::new();
    let mut old_line: u32 = 0;
    let mut new_line: u32 = 0;

    for raw in patch.lines() {
        if raw.starts_with("@@") {
            match parse_hunk_header(raw) {
                Some(range) => {
                    old_line = range.old_start;
                    new_line = range.new_start;
                }
                None => {
                    log::debug!("Malformed hunk header, keeping line counters: {}", raw);
                }
            }
            lines.push(DiffLine::header(raw));
        } else if let Some(content) = raw.strip_prefix('+') {
            lines.push(DiffLine::addition(content, new_line));
            new_line = new_line.saturating_add(1);
        } else if let Some(content) = raw.strip_prefix('-') {
            lines.push(DiffLine::deletion(content, old_line));
            old_line = old_line.saturating_add(1);
        } else if let Some(content) = raw.strip_prefix(' ') {
            lines.push(DiffLine::context(content, old_line, new_line));
            old_line = old_line.saturating_add(1);
            new_line = new_line.saturating_add(1);
        } else {
            log::trace!("Skipping unrecognized diff line: {:?}", raw);
        }
    }

    lines
}
