use crate::record::ParseError;
use chrono::{DateTime, Utc};

/// Tight inclusive bounds over every valid timestamp seen in one pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateRange {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

/// One rejected line: where it sat in the source and why it was skipped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SkippedLine {
    /// 1-based position in the source.
    pub line_number: usize,
    pub reason: ParseError,
}

/// The product of one full pass: the requested value plus every line the
/// pass had to skip.
///
/// Skips are part of the result, not a side channel. The engine records
/// them here and emits a warning per line; it never writes to stdout.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScanOutcome<T> {
    pub value: T,
    pub skipped: Vec<SkippedLine>,
}
