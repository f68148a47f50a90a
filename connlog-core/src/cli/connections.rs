use crate::cli::render::{self, OutputFormat};
use crate::record::Host;
use crate::scan::{self, LogFile, TimeWindow};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Scan a connection log and print every host that connected to
/// `target` within the window.
pub fn run_connections(
    path: &Path,
    start: &str,
    end: &str,
    target: &str,
    format: OutputFormat,
) -> Result<()> {
    let window = TimeWindow::parse(start, end).context("invalid query window")?;
    let target = Host::from(target);
    let source = LogFile::new(path);

    let outcome = scan::filter_connections(&source, &window, &target)
        .with_context(|| format!("failed to scan {}", source.path().display()))?;

    if !outcome.skipped.is_empty() {
        info!(event = "scan_summary", skipped_lines = outcome.skipped.len());
    }

    let hosts = render::sorted_hosts(outcome.value);

    println!(
        "{}",
        render::render_connections(&target, &window, &hosts, outcome.skipped.len(), format)
    );
    Ok(())
}
