use crate::record::{Host, LogRecord, ParseError};
use chrono::Utc;

/// Validity horizon for record timestamps: 50 years of 365 days, no
/// leap-year correction.
pub const VALIDITY_HORIZON_SECS: i64 = 50 * 365 * 24 * 3600;

/// Parse one raw log line into a [`LogRecord`].
///
/// A line is exactly three whitespace-separated fields:
/// `<unix_timestamp_ms> <source_host> <destination_host>`. The timestamp
/// is milliseconds since the Unix epoch and is floored to whole seconds.
/// Timestamps in the future or more than 50 years in the past are
/// rejected.
///
/// The upper validity bound is the wall clock at the moment of the call;
/// use [`parse_line_at`] to pin it.
pub fn parse_line(raw: &str) -> Result<LogRecord, ParseError> {
    parse_line_at(raw, Utc::now().timestamp())
}

/// Like [`parse_line`], with an explicit "now" (seconds since the Unix
/// epoch) as the upper validity bound.
pub fn parse_line_at(raw: &str, now: i64) -> Result<LogRecord, ParseError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();

    let [timestamp_ms, source, destination] = fields.as_slice() else {
        return Err(ParseError::MalformedLine {
            fields: fields.len(),
        });
    };

    let timestamp_ms: i64 = timestamp_ms
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp {
            token: (*timestamp_ms).to_owned(),
        })?;

    // Floor division: -5ms must land at -1s so the sign check below
    // still catches it.
    let seconds = timestamp_ms.div_euclid(1000);

    if seconds < 0 {
        return Err(ParseError::NegativeTimestamp { seconds });
    }

    if seconds > now || seconds < now - VALIDITY_HORIZON_SECS {
        return Err(ParseError::TimestampOutOfRange { seconds });
    }

    Ok(LogRecord {
        timestamp: seconds,
        source: Host::from(*source),
        destination: Host::from(*destination),
    })
}
