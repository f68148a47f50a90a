use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A re-readable stream of log lines.
///
/// Each query operation is an independent full pass, so every scan opens
/// the source afresh and never shares reader state with another pass.
pub trait LogSource {
    type Reader: BufRead;

    /// Open a new reader positioned at the first line.
    fn open(&self) -> io::Result<Self::Reader>;
}

/// A connection log on disk.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for LogFile {
    type Reader = BufReader<File>;

    fn open(&self) -> io::Result<Self::Reader> {
        Ok(BufReader::new(File::open(&self.path)?))
    }
}
