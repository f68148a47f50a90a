use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Milliseconds since the Unix epoch for a UTC date-time literal.
pub fn epoch_ms(datetime: &str) -> i64 {
    NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S")
        .expect("fixture datetime must match YYYY-MM-DD HH:MM:SS")
        .and_utc()
        .timestamp()
        * 1000
}

/// One log line in the on-disk format.
pub fn line(timestamp_ms: i64, source: &str, destination: &str) -> String {
    format!("{timestamp_ms} {source} {destination}")
}

/// Write a log file under `dir` and return its path.
pub fn write_log(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("failed to write log fixture");
    path
}
