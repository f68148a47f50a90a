//! Command implementations behind the `connlog` binary.
//!
//! Each command follows the same shape:
//!
//! 1. Wrap the path in a [`LogFile`](crate::scan::LogFile) source.
//! 2. Run one scan pass over it.
//! 3. Log a summary of skipped lines, if any.
//! 4. Render the result to stdout as text or JSON.
//!
//! Scans never print; all stdout output is produced here from the
//! returned outcome, so diagnostics on stderr stay separable from
//! query results.

mod connections;
mod interactive;
mod range;
mod render;

pub use connections::run_connections;
pub use interactive::run_interactive;
pub use range::run_range;
pub use render::OutputFormat;
