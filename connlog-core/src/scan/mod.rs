mod connections;
mod error;
mod range;
mod source;
#[cfg(test)]
mod tests;
mod types;
mod window;

pub use connections::filter_connections;
pub use error::ScanError;
pub use range::compute_date_range;
pub use source::{LogFile, LogSource};
pub use types::{DateRange, ScanOutcome, SkippedLine};
pub use window::{DATE_FORMAT, TimeWindow, WindowError};
