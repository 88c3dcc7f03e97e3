//! Tests for exception suppression — date-scoped carve-outs that switch a
//! recurring rule off for specific hours on one day.

use chapel_availability::clock::CivilClock;
use chapel_availability::exception::suppresses;
use chapel_availability::interval::Interval;
use chapel_availability::types::TimeException;
use chrono::{TimeZone, Utc};

fn clock() -> CivilClock {
    CivilClock::new("UTC", None).unwrap()
}

fn slice(day: u32, start_hour: u32, end_hour: u32) -> Interval {
    Interval {
        start: Utc.with_ymd_and_hms(2024, 6, day, start_hour, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 6, day, end_hour, 0, 0).unwrap(),
    }
}

fn exception(date: &str, start_hour: i32, end_hour: i32) -> TimeException {
    TimeException {
        date: Some(date.to_string()),
        start_hour: Some(start_hour),
        end_hour: Some(end_hour),
    }
}

#[test]
fn matching_date_and_hours_suppresses() {
    let exceptions = vec![exception("2024-06-10", 12, 13)];
    assert!(suppresses(&exceptions, slice(10, 12, 13), &clock()));
}

#[test]
fn partial_overlap_is_enough() {
    // Exception 12:00-13:00; a slice 12:30-13:30 overlaps only partially
    // but is still suppressed.
    let exceptions = vec![exception("2024-06-10", 12, 13)];
    let half_in = Interval {
        start: Utc.with_ymd_and_hms(2024, 6, 10, 12, 30, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 6, 10, 13, 30, 0).unwrap(),
    };
    assert!(suppresses(&exceptions, half_in, &clock()));
}

#[test]
fn touching_does_not_suppress() {
    let exceptions = vec![exception("2024-06-10", 12, 13)];
    assert!(!suppresses(&exceptions, slice(10, 13, 14), &clock()));
    assert!(!suppresses(&exceptions, slice(10, 11, 12), &clock()));
}

#[test]
fn different_date_never_matches() {
    let exceptions = vec![exception("2024-06-11", 12, 13)];
    assert!(!suppresses(&exceptions, slice(10, 12, 13), &clock()));
}

#[test]
fn malformed_date_is_ignored() {
    let bad_date = TimeException {
        date: Some("10/06/2024".to_string()),
        start_hour: Some(0),
        end_hour: Some(24),
    };
    let missing_date = TimeException {
        date: None,
        start_hour: Some(0),
        end_hour: Some(24),
    };
    assert!(!suppresses(&[bad_date, missing_date], slice(10, 12, 13), &clock()));
}

#[test]
fn malformed_hours_are_ignored() {
    let bad_hours = TimeException {
        date: Some("2024-06-10".to_string()),
        start_hour: Some(13),
        end_hour: Some(12),
    };
    assert!(!suppresses(&[bad_hours], slice(10, 12, 13), &clock()));
}

#[test]
fn any_matching_exception_suppresses() {
    let exceptions = vec![
        exception("2024-06-09", 0, 24),
        exception("2024-06-10", 12, 13),
    ];
    assert!(suppresses(&exceptions, slice(10, 12, 13), &clock()));
}

#[test]
fn empty_exception_list_never_suppresses() {
    assert!(!suppresses(&[], slice(10, 12, 13), &clock()));
}
