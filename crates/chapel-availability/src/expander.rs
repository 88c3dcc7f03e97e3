//! Slice expansion — walks a query range civil-day by civil-day and emits
//! the concrete blocked intervals a single rule produces inside it.
//!
//! Candidate slices are always exactly one civil hour; slices outside the
//! range are skipped and surviving slices are merged, so adjacent blocked
//! hours come back as one interval. Cost is O(days × hours) per rule, and
//! days are bounded by the calendar viewport (about five weeks).

use crate::clock::CivilClock;
use crate::evaluator;
use crate::interval::{merge_intervals, Interval};
use crate::types::{DayRule, HourRule};

/// Expand an hour rule over `range` into merged blocked intervals.
///
/// Candidate hours are the rule's own `[start_hour, end_hour)` domain on
/// every civil day the range touches.
pub fn expand_hour_rule(rule: &HourRule, range: Interval, clock: &CivilClock) -> Vec<Interval> {
    let Some((start_hour, end_hour)) = rule.hour_window() else {
        return Vec::new();
    };

    expand_slices(range, clock, start_hour, end_hour, |slice| {
        evaluator::blocked_by_hour_rule(rule, slice, clock)
    })
}

/// Expand a day rule over `range` into merged blocked intervals.
///
/// Candidate hours are all 24 of each day; the weekday-membership check in
/// the evaluator decides which days contribute.
pub fn expand_day_rule(rule: &DayRule, range: Interval, clock: &CivilClock) -> Vec<Interval> {
    expand_slices(range, clock, 0, 24, |slice| {
        evaluator::blocked_by_day_rule(rule, slice, clock)
    })
}

/// Shared civil-day walk: for each day from the range start's civil date
/// through the range end's civil date inclusive, build 1-hour slices for
/// each candidate hour, keep the blocked ones, merge.
fn expand_slices(
    range: Interval,
    clock: &CivilClock,
    start_hour: u32,
    end_hour: u32,
    blocked: impl Fn(Interval) -> bool,
) -> Vec<Interval> {
    let mut kept = Vec::new();

    let mut day = clock.civil_date(range.start);
    let last_day = clock.civil_date(range.end);

    while day <= last_day {
        for hour in start_hour..end_hour {
            let slice_start = clock.civil_hour(day, hour);
            let slice_end = clock.civil_hour(day, hour + 1);

            // An hour erased by a spring-forward transition collapses to an
            // empty slice; skip it rather than evaluating a zero-width span.
            if slice_start >= slice_end {
                continue;
            }
            if slice_end <= range.start || slice_start >= range.end {
                continue;
            }

            let slice = Interval {
                start: slice_start,
                end: slice_end,
            };
            if blocked(slice) {
                kept.push(slice);
            }
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    merge_intervals(kept)
}
