//! Half-open time intervals and interval merging.
//!
//! Every downstream consumer assumes merge output is sorted ascending and
//! disjoint; touching intervals are deliberately coalesced so that adjacent
//! one-hour slices from rule expansion collapse into multi-hour blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};

/// A half-open interval `[start, end)` of absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Construct an interval, enforcing `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(AvailabilityError::InvalidRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            })
        }
    }

    /// Strict overlap: shares at least one instant with `other`.
    /// Touching intervals (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Containment: `other` lies entirely within `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Merge an unordered list of intervals into a sorted, disjoint set.
///
/// Overlapping intervals merge taking the later end; touching intervals
/// (`end == next start`) merge as well. Empty input yields empty output.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or touching — extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
