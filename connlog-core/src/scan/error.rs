use std::io;
use thiserror::Error;

/// Fatal scan failures.
///
/// Unlike per-line parse rejections, these abort the whole pass: a
/// source that cannot be opened or read yields no result at all.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open log source")]
    Open(#[source] io::Error),

    #[error("failed to read log line {line_number}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
}
