use clap::{Parser, Subcommand};
use connlog_core::cli::{OutputFormat, run_connections, run_interactive, run_range};
use connlog_core::logging::init_logging;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "connlog",
    version,
    about = "Query connection logs: covered period and per-target connection history"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the time span covered by a connection log
    Range {
        /// Path to the connection log
        file: PathBuf,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the distinct hosts that connected to a target within a window
    Connections {
        /// Path to the connection log
        file: PathBuf,

        /// Window start, "YYYY-MM-DD HH:MM:SS" (UTC, inclusive)
        #[arg(long)]
        from: String,

        /// Window end, "YYYY-MM-DD HH:MM:SS" (UTC, inclusive)
        #[arg(long)]
        to: String,

        /// Destination host to match
        #[arg(long)]
        target: String,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Guided session: inspect the covered period, then run one query
    Interactive {
        /// Path to the connection log
        file: PathBuf,
    },
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Range { file, json } => run_range(&file, output_format(json)),
        Command::Connections {
            file,
            from,
            to,
            target,
            json,
        } => run_connections(&file, &from, &to, &target, output_format(json)),
        Command::Interactive { file } => run_interactive(&file),
    };

    if let Err(e) = result {
        eprintln!("connlog error: {e:#}");
        process::exit(1);
    }
}
