use thiserror::Error;

/// Why a single log line was rejected.
///
/// These are recoverable by contract: the scan skips the offending line,
/// records the rejection, and keeps going.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("malformed line: expected 3 whitespace-separated fields, found {fields}")]
    MalformedLine { fields: usize },

    #[error("invalid timestamp {token:?}: not an integer")]
    InvalidTimestamp { token: String },

    #[error("negative timestamp: {seconds}s is before the Unix epoch")]
    NegativeTimestamp { seconds: i64 },

    #[error("timestamp out of range: {seconds}s is in the future or older than 50 years")]
    TimestampOutOfRange { seconds: i64 },
}
