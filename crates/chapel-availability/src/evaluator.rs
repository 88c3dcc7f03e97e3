//! Per-slice rule evaluation.
//!
//! The two rule kinds intentionally use different boundary policies: an hour
//! rule blocks a slice only when the slice is fully contained in the rule's
//! local window, while a day rule blocks by weekday membership (its implicit
//! window is the whole civil day, so containment is automatic). A slice
//! straddling an hour-rule boundary is therefore NOT blocked — this governs
//! whether boundary-straddling selections count as already-blocked, and must
//! not be "normalized" to plain overlap.

use crate::clock::CivilClock;
use crate::exception;
use crate::interval::Interval;
use crate::types::{DayRule, HourRule, Snapshot};

/// Whether an hour rule blocks `slice`.
///
/// Containment check against the rule's window on the slice's own civil
/// date, then exception suppression. A rule with malformed bounds blocks
/// nothing.
pub fn blocked_by_hour_rule(rule: &HourRule, slice: Interval, clock: &CivilClock) -> bool {
    let Some((start_hour, end_hour)) = rule.hour_window() else {
        return false;
    };

    let date = clock.civil_date(slice.start);
    let rule_start = clock.civil_hour(date, start_hour);
    let rule_end = clock.civil_hour(date, end_hour);

    if slice.start < rule_start || slice.end > rule_end {
        return false;
    }

    !exception::suppresses(&rule.exceptions, slice, clock)
}

/// Whether a day rule blocks `slice`: the slice's civil weekday is listed
/// and no exception suppresses it.
pub fn blocked_by_day_rule(rule: &DayRule, slice: Interval, clock: &CivilClock) -> bool {
    if !rule.matches_weekday(clock.weekday_name(slice.start)) {
        return false;
    }

    !exception::suppresses(&rule.exceptions, slice, clock)
}

/// Whether any active rule blocks `slice`: the day rule OR any hour rule.
pub fn auto_blocked(snapshot: &Snapshot, slice: Interval, clock: &CivilClock) -> bool {
    if let Some(day_rule) = &snapshot.day_rule {
        if blocked_by_day_rule(day_rule, slice, clock) {
            return true;
        }
    }

    snapshot
        .hour_rules
        .iter()
        .any(|rule| blocked_by_hour_rule(rule, slice, clock))
}
