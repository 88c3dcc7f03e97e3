//! Civil-clock tests around DST transitions.
//!
//! America/New_York, 2024: spring forward on 03-10 (02:00 → 03:00) and fall
//! back on 11-03 (02:00 → 01:00). Slice construction must stay monotonic
//! and never crash on the skipped hour.

use chapel_availability::clock::CivilClock;
use chapel_availability::expander::expand_day_rule;
use chapel_availability::interval::Interval;
use chapel_availability::types::DayRule;
use chrono::{Duration, NaiveDate, TimeZone, Utc};

fn new_york() -> CivilClock {
    CivilClock::new("America/New_York", None).unwrap()
}

fn sunday_rule() -> DayRule {
    DayRule {
        id: "dr1".to_string(),
        days_of_week: vec!["Sunday".to_string()],
        exceptions: vec![],
    }
}

#[test]
fn civil_hour_is_monotonic_across_spring_forward() {
    let clock = new_york();
    let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let mut previous = clock.civil_hour(day, 0);
    for hour in 1..=24 {
        let instant = clock.civil_hour(day, hour);
        assert!(
            instant >= previous,
            "hour {} resolved before hour {}",
            hour,
            hour - 1
        );
        previous = instant;
    }
}

#[test]
fn skipped_hour_resolves_to_the_gap_end() {
    let clock = new_york();
    let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    // Local 02:00 does not exist; it resolves to 03:00 EDT, the same
    // instant as local 03:00.
    let two = clock.civil_hour(day, 2);
    let three = clock.civil_hour(day, 3);
    assert_eq!(two, Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap());
    assert_eq!(two, three);
}

#[test]
fn ambiguous_hour_resolves_to_the_earlier_offset() {
    let clock = new_york();
    let day = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();

    // Local 01:00 occurs twice; the EDT occurrence wins.
    assert_eq!(
        clock.civil_hour(day, 1),
        Utc.with_ymd_and_hms(2024, 11, 3, 5, 0, 0).unwrap()
    );
}

#[test]
fn day_rule_covers_23_hours_on_spring_forward_day() {
    let clock = new_york();
    // Local Sunday 2024-03-10 runs 05:00Z to 04:00Z the next day.
    let range = Interval {
        start: Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 3, 11, 4, 0, 0).unwrap(),
    };

    let intervals = expand_day_rule(&sunday_rule(), range, &clock);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, range.start);
    assert_eq!(intervals[0].end, range.end);
    assert_eq!(intervals[0].end - intervals[0].start, Duration::hours(23));
}

#[test]
fn day_rule_covers_25_hours_on_fall_back_day() {
    let clock = new_york();
    // Local Sunday 2024-11-03 runs 04:00Z to 05:00Z the next day.
    let range = Interval {
        start: Utc.with_ymd_and_hms(2024, 11, 3, 4, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 11, 4, 5, 0, 0).unwrap(),
    };

    let intervals = expand_day_rule(&sunday_rule(), range, &clock);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].end - intervals[0].start, Duration::hours(25));
}

#[test]
fn civil_accessors_use_the_resource_zone() {
    let clock = new_york();
    // 2024-06-11 01:00Z is still Monday evening in New York.
    let instant = Utc.with_ymd_and_hms(2024, 6, 11, 1, 0, 0).unwrap();

    assert_eq!(clock.civil_date_string(instant), "2024-06-10");
    assert_eq!(clock.weekday_name(instant), "Monday");
    assert_eq!(
        clock.civil_midnight(instant),
        Utc.with_ymd_and_hms(2024, 6, 10, 4, 0, 0).unwrap()
    );
}

#[test]
fn end_of_day_bound_means_next_local_midnight() {
    let clock = new_york();
    let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    assert_eq!(
        clock.civil_hour(day, 24),
        Utc.with_ymd_and_hms(2024, 6, 11, 4, 0, 0).unwrap()
    );
}
