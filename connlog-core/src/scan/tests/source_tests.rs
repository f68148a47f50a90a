use crate::scan::{LogFile, LogSource};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn exposes_the_backing_path() {
    // Arrange
    let source = LogFile::new("/var/log/conn.log");

    // Assert
    assert_eq!(source.path(), Path::new("/var/log/conn.log"));
}

#[test]
fn every_open_starts_at_the_first_line() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("conn.log");
    fs::write(&path, "100000 alpha store\n200000 bravo store\n").unwrap();
    let source = LogFile::new(&path);

    // Act: two independent readers off the same source.
    let first: Vec<String> = source
        .open()
        .unwrap()
        .lines()
        .map(Result::unwrap)
        .collect();
    let second: Vec<String> = source
        .open()
        .unwrap()
        .lines()
        .map(Result::unwrap)
        .collect();

    // Assert
    assert_eq!(first, vec!["100000 alpha store", "200000 bravo store"]);
    assert_eq!(first, second);
}
