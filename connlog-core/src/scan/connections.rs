use crate::record::{self, Host, LogRecord, ParseError};
use crate::scan::{LogSource, ScanError, ScanOutcome, SkippedLine, TimeWindow};
use std::collections::HashSet;
use std::io::BufRead;
use tracing::warn;

/// Scan the whole source and collect every distinct source host with at
/// least one valid record inside `window` whose destination is `target`.
///
/// Duplicate connections collapse; hostnames are matched verbatim.
pub fn filter_connections<S: LogSource>(
    source: &S,
    window: &TimeWindow,
    target: &Host,
) -> Result<ScanOutcome<HashSet<Host>>, ScanError> {
    filter_connections_with_parser(source, window, target, record::parse_line)
}

pub(crate) fn filter_connections_with_parser<S, P>(
    source: &S,
    window: &TimeWindow,
    target: &Host,
    parse: P,
) -> Result<ScanOutcome<HashSet<Host>>, ScanError>
where
    S: LogSource,
    P: Fn(&str) -> Result<LogRecord, ParseError>,
{
    let reader = source.open().map_err(ScanError::Open)?;

    let mut connected = HashSet::new();
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ScanError::Read {
            line_number,
            source,
        })?;

        match parse(&line) {
            Ok(record) => {
                if record.destination == *target && window.contains(record.datetime()) {
                    connected.insert(record.source);
                }
            }
            Err(reason) => {
                warn!(event = "line_skipped", line = line_number, reason = %reason);
                skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    Ok(ScanOutcome {
        value: connected,
        skipped,
    })
}
