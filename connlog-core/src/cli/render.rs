use crate::record::Host;
use crate::scan::{DATE_FORMAT, DateRange, TimeWindow};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// How query results are written to stdout.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A UTC instant in the same format the query window accepts.
pub(crate) fn format_utc(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Collapse a connection set into the stable order used for output.
/// Ordering is presentation only; the set itself carries none.
pub(crate) fn sorted_hosts(connected: HashSet<Host>) -> Vec<Host> {
    let mut hosts: Vec<Host> = connected.into_iter().collect();
    hosts.sort();
    hosts
}

#[derive(Serialize)]
struct BoundsJson {
    min: String,
    max: String,
}

#[derive(Serialize)]
struct RangeReportJson {
    range: Option<BoundsJson>,
    skipped_lines: usize,
}

#[derive(Serialize)]
struct WindowJson {
    start: String,
    end: String,
}

#[derive(Serialize)]
struct ConnectionsReportJson<'a> {
    target: &'a Host,
    window: WindowJson,
    hosts: &'a [Host],
    skipped_lines: usize,
}

pub(crate) fn render_range(
    range: Option<&DateRange>,
    skipped_lines: usize,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => match range {
            Some(range) => format!(
                "The log file covers the period from {} to {}.",
                format_utc(range.min),
                format_utc(range.max),
            ),
            None => "No valid timestamps found in the log file.".to_owned(),
        },
        OutputFormat::Json => {
            let report = RangeReportJson {
                range: range.map(|range| BoundsJson {
                    min: format_utc(range.min),
                    max: format_utc(range.max),
                }),
                skipped_lines,
            };
            serde_json::to_string_pretty(&report).expect("failed to serialize range report")
        }
    }
}

/// `hosts` is expected in display order; callers sort before rendering.
pub(crate) fn render_connections(
    target: &Host,
    window: &TimeWindow,
    hosts: &[Host],
    skipped_lines: usize,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "Hosts connected to {} during the period {} to {}:",
                target,
                format_utc(window.start),
                format_utc(window.end),
            );
            if hosts.is_empty() {
                out.push_str("\n(none)");
            } else {
                for host in hosts {
                    out.push('\n');
                    out.push_str(&host.0);
                }
            }
            out
        }
        OutputFormat::Json => {
            let report = ConnectionsReportJson {
                target,
                window: WindowJson {
                    start: format_utc(window.start),
                    end: format_utc(window.end),
                },
                hosts,
                skipped_lines,
            };
            serde_json::to_string_pretty(&report).expect("failed to serialize connections report")
        }
    }
}
