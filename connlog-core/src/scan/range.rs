use crate::record::{self, LogRecord, ParseError};
use crate::scan::{DateRange, LogSource, ScanError, ScanOutcome, SkippedLine};
use std::io::BufRead;
use tracing::warn;

/// Scan the whole source and report the inclusive bounds of all valid
/// timestamps, or `None` when not a single line parses.
///
/// Lines that fail to parse are skipped and recorded in the outcome;
/// they never abort the pass.
pub fn compute_date_range<S: LogSource>(
    source: &S,
) -> Result<ScanOutcome<Option<DateRange>>, ScanError> {
    compute_date_range_with_parser(source, record::parse_line)
}

pub(crate) fn compute_date_range_with_parser<S, P>(
    source: &S,
    parse: P,
) -> Result<ScanOutcome<Option<DateRange>>, ScanError>
where
    S: LogSource,
    P: Fn(&str) -> Result<LogRecord, ParseError>,
{
    let reader = source.open().map_err(ScanError::Open)?;

    // "No valid line yet" is an explicit state, not a sentinel bound.
    let mut bounds: Option<DateRange> = None;
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ScanError::Read {
            line_number,
            source,
        })?;

        match parse(&line) {
            Ok(record) => {
                let at = record.datetime();
                bounds = Some(match bounds {
                    None => DateRange { min: at, max: at },
                    Some(range) => DateRange {
                        min: range.min.min(at),
                        max: range.max.max(at),
                    },
                });
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
        value: bounds,
        skipped,
    })
}
