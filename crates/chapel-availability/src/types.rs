//! Persistence-facing document types.
//!
//! These map 1:1 onto the rule/block documents fetched from the content
//! store. Deserialization is deliberately lenient: numeric bounds and dates
//! arrive as optionals and are validated only at evaluation time, so a
//! misconfigured document degrades to "contributes no blocking" instead of
//! failing the whole availability computation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An explicit admin-created blocked interval. Absolute instants, no
/// exceptions, no recurrence; always wins over rule-derived blocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualBlock {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A booked reservation. Informational only — reservations never contribute
/// to blocking decisions, they are just passed through to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A date-scoped carve-out suppressing a recurring rule for specific hours
/// on one specific civil date (`YYYY-MM-DD`). No recurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeException {
    pub date: Option<String>,
    pub start_hour: Option<i32>,
    pub end_hour: Option<i32>,
}

impl TimeException {
    /// The validated `(date, start_hour, end_hour)` window, or `None` when
    /// the document is malformed — a malformed exception never suppresses.
    pub(crate) fn window(&self) -> Option<(NaiveDate, u32, u32)> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d").ok()?;
        let (start, end) = valid_hour_window(self.start_hour, self.end_hour)?;
        Some((date, start, end))
    }
}

/// Blocks the civil hours `[start_hour, end_hour)` of every day, unless a
/// date-matching exception suppresses a given slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourRule {
    pub id: String,
    #[serde(default)]
    pub start_hour: Option<i32>,
    #[serde(default)]
    pub end_hour: Option<i32>,
    #[serde(default)]
    pub exceptions: Vec<TimeException>,
}

impl HourRule {
    /// The validated `[start_hour, end_hour)` window, or `None` when the
    /// bounds are missing or out of range — the rule then blocks nothing.
    pub(crate) fn hour_window(&self) -> Option<(u32, u32)> {
        valid_hour_window(self.start_hour, self.end_hour)
    }
}

/// Blocks all 24 civil hours of any date whose weekday name matches, unless
/// suppressed by a date-matching exception. At most one is active per
/// resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRule {
    pub id: String,
    #[serde(default)]
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<TimeException>,
}

impl DayRule {
    /// Whether a full weekday name ("Monday".."Sunday") is listed.
    pub(crate) fn matches_weekday(&self, name: &str) -> bool {
        self.days_of_week.iter().any(|d| d.eq_ignore_ascii_case(name))
    }
}

/// One immutable bundle of everything the engine evaluates against.
///
/// Collections are replaced wholesale on each fetch; the engine never
/// mutates a snapshot, and one evaluation call sees exactly one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub manual_blocks: Vec<ManualBlock>,
    pub reservations: Vec<Reservation>,
    pub hour_rules: Vec<HourRule>,
    pub day_rule: Option<DayRule>,
}

/// Validate an `[start, end)` hour window: both bounds present, within
/// `[0, 24]`, and `start <= end`.
fn valid_hour_window(start: Option<i32>, end: Option<i32>) -> Option<(u32, u32)> {
    let (start, end) = (start?, end?);
    if (0..=24).contains(&start) && (0..=24).contains(&end) && start <= end {
        Some((start as u32, end as u32))
    } else {
        None
    }
}
