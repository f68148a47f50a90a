use crate::scan::{TimeWindow, WindowError};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}

#[test]
fn parses_utc_bounds() {
    // Act
    let window = TimeWindow::parse("2024-03-01 10:00:00", "2024-03-02 09:30:00").unwrap();

    // Assert
    assert_eq!(window.start, at(1_709_287_200));
    assert_eq!(window.end, at(1_709_371_800));
}

#[test]
fn surrounding_whitespace_is_insignificant() {
    // Act
    let window = TimeWindow::parse("  2024-03-01 10:00:00 ", "2024-03-02 09:30:00\n").unwrap();

    // Assert
    assert_eq!(window.start, at(1_709_287_200));
    assert_eq!(window.end, at(1_709_371_800));
}

#[test]
fn iso_t_separator_is_rejected() {
    // Act
    let err = TimeWindow::parse("2024-03-01T10:00:00", "2024-03-02 09:30:00").unwrap_err();

    // Assert
    assert!(matches!(
        err,
        WindowError::InvalidDateFormat { input } if input == "2024-03-01T10:00:00"
    ));
}

#[test]
fn impossible_calendar_date_is_rejected() {
    // Act
    let err = TimeWindow::parse("2024-13-01 10:00:00", "2024-03-02 09:30:00").unwrap_err();

    // Assert
    assert!(matches!(err, WindowError::InvalidDateFormat { .. }));
}

#[test]
fn trailing_text_is_rejected() {
    // Act
    let err = TimeWindow::parse("2024-03-01 10:00:00 UTC", "2024-03-02 09:30:00").unwrap_err();

    // Assert
    assert!(matches!(err, WindowError::InvalidDateFormat { .. }));
}

#[test]
fn bad_end_bound_is_rejected_too() {
    // Act
    let err = TimeWindow::parse("2024-03-01 10:00:00", "yesterday").unwrap_err();

    // Assert
    assert!(matches!(
        err,
        WindowError::InvalidDateFormat { input } if input == "yesterday"
    ));
}

#[test]
fn contains_is_inclusive_on_both_bounds() {
    // Arrange
    let window = TimeWindow::new(at(1_000), at(2_000));

    // Assert
    assert!(window.contains(at(1_000)));
    assert!(window.contains(at(1_500)));
    assert!(window.contains(at(2_000)));
    assert!(!window.contains(at(999)));
    assert!(!window.contains(at(2_001)));
}

#[test]
fn inverted_window_contains_nothing() {
    // Arrange
    let window = TimeWindow::new(at(2_000), at(1_000));

    // Assert
    assert!(!window.contains(at(1_000)));
    assert!(!window.contains(at(1_500)));
    assert!(!window.contains(at(2_000)));
}
