use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A hostname as it appears in the log: one whitespace-delimited token,
/// matched verbatim. No further validation is applied.
#[derive(Debug, Clone, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Host(pub String);

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Host {
    fn from(s: String) -> Self {
        Host(s)
    }
}

impl From<&str> for Host {
    fn from(s: &str) -> Self {
        Host(s.to_owned())
    }
}

/// One validated connection event: who connected to whom, and when.
///
/// Records live for a single scan iteration; they are produced per line
/// and immediately folded into the query result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogRecord {
    /// Seconds since the Unix epoch, UTC. Parsing floors the raw
    /// millisecond value and validates it against the rolling 50-year
    /// window.
    pub timestamp: i64,
    pub source: Host,
    pub destination: Host,
}

impl LogRecord {
    /// UTC instant of this record.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp, 0)
            .expect("timestamp must be validated before record construction")
    }
}
