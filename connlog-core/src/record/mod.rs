mod error;
mod parse;
mod types;

pub use error::ParseError;
pub use parse::{VALIDITY_HORIZON_SECS, parse_line, parse_line_at};
pub use types::{Host, LogRecord};
