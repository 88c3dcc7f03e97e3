//! Civil-time conversions for a single resource timezone.
//!
//! All rule semantics are defined in the resource's wall-clock time, so every
//! hour window has to be resolved through the IANA zone's actual offset rules
//! (via `chrono-tz`) rather than a fixed UTC offset. Spring-forward gaps are
//! shifted to the next valid wall time, which keeps instant ordering monotonic
//! across a transition day; ambiguous fall-back times take the earlier offset.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{AvailabilityError, Result};

/// Injectable source of "now" so time-dependent output (the past overlay) is
/// deterministic under test.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Production time source backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for tests and replay-style callers.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Converts between absolute instants and the resource's civil time.
#[derive(Debug, Clone, Copy)]
pub struct CivilClock {
    tz: Tz,
}

impl CivilClock {
    /// Resolve a zone identifier, falling back to `default_zone` when the
    /// primary one is unknown. Failure of both is a fatal configuration
    /// error, the only hard error the engine produces.
    pub fn new(zone: &str, default_zone: Option<&str>) -> Result<Self> {
        if let Ok(tz) = zone.parse::<Tz>() {
            return Ok(Self { tz });
        }
        if let Some(fallback) = default_zone {
            if let Ok(tz) = fallback.parse::<Tz>() {
                return Ok(Self { tz });
            }
        }
        Err(AvailabilityError::InvalidTimezone(zone.to_string()))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Interpret an absolute instant as civil time in the resource zone.
    pub fn to_civil(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// The civil calendar date an instant falls on.
    pub fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.to_civil(instant).date_naive()
    }

    /// The civil date as a `YYYY-MM-DD` string, the form exception documents
    /// carry their date in.
    pub fn civil_date_string(&self, instant: DateTime<Utc>) -> String {
        self.civil_date(instant).format("%Y-%m-%d").to_string()
    }

    /// Full English weekday name ("Monday".."Sunday") of an instant's civil date.
    pub fn weekday_name(&self, instant: DateTime<Utc>) -> &'static str {
        weekday_name(self.to_civil(instant).weekday())
    }

    /// The instant at which an instant's civil day began (local midnight).
    pub fn civil_midnight(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.civil_hour(self.civil_date(instant), 0)
    }

    /// The instant corresponding to a given local date and hour.
    ///
    /// `hour` may be 24, meaning midnight of the following day; that is how
    /// rule and exception end bounds express "end of day". Hours erased by a
    /// spring-forward transition resolve to the first valid instant after the
    /// gap, so consecutive hours always yield non-decreasing instants.
    pub fn civil_hour(&self, date: NaiveDate, hour: u32) -> DateTime<Utc> {
        let naive = date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour));
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            LocalResult::None => {
                // Wall time inside a DST gap. Gaps are one hour in every zone
                // this system serves, so the shifted time is resolvable.
                let shifted = naive + Duration::hours(1);
                match self.tz.from_local_datetime(&shifted) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        dt.with_timezone(&Utc)
                    }
                    LocalResult::None => Utc.from_utc_datetime(&naive),
                }
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
