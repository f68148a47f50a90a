use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Accepted format for caller-supplied window bounds, interpreted as UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid date {input:?}: expected the format YYYY-MM-DD HH:MM:SS")]
    InvalidDateFormat { input: String },
}

/// An inclusive UTC time window.
///
/// `start <= end` is not enforced. An inverted window matches nothing,
/// which callers treat as an ordinary empty result.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse caller-supplied bounds. Surrounding whitespace is
    /// insignificant; any other deviation from [`DATE_FORMAT`] is an
    /// error, never a silent correction.
    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

fn parse_bound(input: &str) -> Result<DateTime<Utc>, WindowError> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| WindowError::InvalidDateFormat {
            input: input.to_owned(),
        })
}
