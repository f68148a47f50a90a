use crate::cli::render::{self, OutputFormat};
use crate::scan::{self, LogFile};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Scan a connection log and print the period it covers.
pub fn run_range(path: &Path, format: OutputFormat) -> Result<()> {
    let source = LogFile::new(path);

    let outcome = scan::compute_date_range(&source)
        .with_context(|| format!("failed to scan {}", source.path().display()))?;

    if !outcome.skipped.is_empty() {
        info!(event = "scan_summary", skipped_lines = outcome.skipped.len());
    }

    println!(
        "{}",
        render::render_range(outcome.value.as_ref(), outcome.skipped.len(), format)
    );
    Ok(())
}
