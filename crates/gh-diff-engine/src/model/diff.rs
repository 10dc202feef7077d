//! Line records produced by the parser and annotated by the highlighter.

use serde::{Deserialize, Serialize};

/// A single line of a parsed patch.
///
/// Each variant only carries the fields that are legal for it: additions
/// have no old line number, deletions no new one, and only changed lines can
/// carry word-level segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffLine {
    /// `@@ -a,b +c,d @@` hunk header (full line as content).
    Header { content: String },
    /// Unchanged line present in both versions.
    #[serde(rename_all = "camelCase")]
    Context {
        content: String,
        old_line_number: u32,
        new_line_number: u32,
    },
    /// Line only present in the old version.
    #[serde(rename_all = "camelCase")]
    Remove {
        content: String,
        old_line_number: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        segments: Option<Vec<DiffSegment>>,
    },
    /// Line only present in the new version.
    #[serde(rename_all = "camelCase")]
    Add {
        content: String,
        new_line_number: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        segments: Option<Vec<DiffSegment>>,
    },
}

impl DiffLine {
    /// Create a hunk header line.
    pub fn header(content: impl Into<String>) -> Self {
        DiffLine::Header {
            content: content.into(),
        }
    }

    /// Create a new context line.
    pub fn context(content: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        DiffLine::Context {
            content: content.into(),
            old_line_number: old_line,
            new_line_number: new_line,
        }
    }

    /// Create a new addition line.
    pub fn addition(content: impl Into<String>, new_line: u32) -> Self {
        DiffLine::Add {
            content: content.into(),
            new_line_number: new_line,
            segments: None,
        }
    }

    /// Create a new deletion line.
    pub fn deletion(content: impl Into<String>, old_line: u32) -> Self {
        DiffLine::Remove {
            content: content.into(),
            old_line_number: old_line,
            segments: None,
        }
    }

    /// Line type.
    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Header { .. } => LineKind::Header,
            DiffLine::Context { .. } => LineKind::Context,
            DiffLine::Remove { .. } => LineKind::Remove,
            DiffLine::Add { .. } => LineKind::Add,
        }
    }

    /// Line content (without the leading marker, except for headers).
    pub fn content(&self) -> &str {
        match self {
            DiffLine::Header { content }
            | DiffLine::Context { content, .. }
            | DiffLine::Remove { content, .. }
            | DiffLine::Add { content, .. } => content,
        }
    }

    /// Line number in the old file (context and deletions).
    pub fn old_line_number(&self) -> Option<u32> {
        match self {
            DiffLine::Context {
                old_line_number, ..
            }
            | DiffLine::Remove {
                old_line_number, ..
            } => Some(*old_line_number),
            DiffLine::Header { .. } | DiffLine::Add { .. } => None,
        }
    }

    /// Line number in the new file (context and additions).
    pub fn new_line_number(&self) -> Option<u32> {
        match self {
            DiffLine::Context {
                new_line_number, ..
            }
            | DiffLine::Add {
                new_line_number, ..
            } => Some(*new_line_number),
            DiffLine::Header { .. } | DiffLine::Remove { .. } => None,
        }
    }

    /// Word-level segments, if this line was paired by the highlighter.
    pub fn segments(&self) -> Option<&[DiffSegment]> {
        match self {
            DiffLine::Remove { segments, .. } | DiffLine::Add { segments, .. } => {
                segments.as_deref()
            }
            DiffLine::Header { .. } | DiffLine::Context { .. } => None,
        }
    }

    /// Attach segments to a changed line. Header and context lines are
    /// returned untouched.
    pub fn with_segments(mut self, new_segments: Vec<DiffSegment>) -> Self {
        match &mut self {
            DiffLine::Remove { segments, .. } | DiffLine::Add { segments, .. } => {
                *segments = Some(new_segments);
            }
            DiffLine::Header { .. } | DiffLine::Context { .. } => {}
        }
        self
    }

    /// Whether this line is an addition or a deletion.
    pub fn is_change(&self) -> bool {
        matches!(self, DiffLine::Add { .. } | DiffLine::Remove { .. })
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Added line (+).
    Add,
    /// Removed line (-).
    Remove,
    /// Unchanged line.
    Context,
    /// @@ header line.
    Header,
}

impl LineKind {
    /// Get the prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Add => '+',
            LineKind::Remove => '-',
            LineKind::Context => ' ',
            LineKind::Header => '@',
        }
    }
}

/// A contiguous run of text within a changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Substring of the parent line's content.
    pub text: String,
    /// True if this run differs between the paired lines.
    pub changed: bool,
}

impl DiffSegment {
    /// Segment present on both sides of a pair.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: false,
        }
    }

    /// Segment only present on one side of a pair.
    pub fn changed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: true,
        }
    }
}
