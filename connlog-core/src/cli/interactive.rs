use crate::cli::render::{self, OutputFormat};
use crate::record::Host;
use crate::scan::{self, LogFile, TimeWindow};
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

/// Guided query session: report the covered period, then prompt for a
/// window and a target host and run a single connections query.
///
/// When the log holds no valid timestamp at all there is nothing to
/// query, so the session ends right after saying so.
pub fn run_interactive(path: &Path) -> Result<()> {
    let source = LogFile::new(path);

    let outcome = scan::compute_date_range(&source)
        .with_context(|| format!("failed to scan {}", source.path().display()))?;

    if !outcome.skipped.is_empty() {
        info!(event = "scan_summary", skipped_lines = outcome.skipped.len());
    }

    let Some(range) = outcome.value else {
        println!("{}", "No valid timestamps found in the log file.".yellow());
        return Ok(());
    };

    let min = render::format_utc(range.min);
    let max = render::format_utc(range.max);
    println!(
        "The log file covers the period from {} to {}.",
        min.bold(),
        max.bold(),
    );

    let start = prompt(&format!(
        "Enter the start datetime (YYYY-MM-DD HH:MM:SS) within {min} and {max}: "
    ))?;
    let end = prompt(&format!(
        "Enter the end datetime (YYYY-MM-DD HH:MM:SS) within {min} and {max}: "
    ))?;
    let target = prompt("Enter the target hostname: ")?;

    let window = TimeWindow::parse(&start, &end).context("invalid query window")?;
    let target = Host::from(target);

    let outcome = scan::filter_connections(&source, &window, &target)
        .with_context(|| format!("failed to scan {}", source.path().display()))?;

    let hosts = render::sorted_hosts(outcome.value);

    println!(
        "{}",
        render::render_connections(
            &target,
            &window,
            &hosts,
            outcome.skipped.len(),
            OutputFormat::Text,
        )
    );
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("stdin closed before the query was complete");
    }
    Ok(line.trim().to_owned())
}
