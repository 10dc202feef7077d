//! Data models for diff representation.

mod diff;
mod stats;

pub use diff::{DiffLine, DiffSegment, LineKind};
pub use stats::DiffStats;
