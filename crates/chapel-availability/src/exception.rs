//! Exception matching — decides whether a date-scoped carve-out suppresses
//! a rule for a given hour slice.

use crate::clock::CivilClock;
use crate::interval::Interval;
use crate::types::TimeException;

/// Whether any exception suppresses `slice`.
///
/// An exception applies when its date equals the civil date of the slice
/// start and its local hour window strictly overlaps the slice — partial
/// overlap is enough, containment is not required. Malformed exceptions
/// (bad date, bad hours) never match. Multiple exceptions OR together.
pub fn suppresses(exceptions: &[TimeException], slice: Interval, clock: &CivilClock) -> bool {
    let slice_date = clock.civil_date(slice.start);

    exceptions.iter().any(|ex| {
        let Some((date, start_hour, end_hour)) = ex.window() else {
            return false;
        };
        if date != slice_date {
            return false;
        }
        let ex_start = clock.civil_hour(date, start_hour);
        let ex_end = clock.civil_hour(date, end_hour);
        slice.start < ex_end && slice.end > ex_start
    })
}
