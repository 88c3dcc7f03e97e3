//! The availability façade — composes slice expansion, manual-block
//! coverage, and the display-event builder behind the two point queries the
//! booking UI asks.
//!
//! The engine holds only configuration (zone, past-overlay window, time
//! source); all rule/block data arrives per call as an immutable
//! [`Snapshot`], so repeated evaluation is idempotent and a concurrent
//! refresh can never bleed into an in-flight computation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{CivilClock, SystemTimeSource, TimeSource};
use crate::error::Result;
use crate::evaluator;
use crate::expander;
use crate::interval::{merge_intervals, Interval};
use crate::manual;
use crate::types::Snapshot;

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// IANA zone identifier of the resource's civil timezone.
    pub timezone: String,
    /// Fallback zone tried when `timezone` fails to resolve.
    pub default_timezone: Option<String>,
    /// Width of the trailing "past" overlay event, in days.
    pub past_window_days: i64,
}

impl EngineConfig {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            default_timezone: None,
            past_window_days: 30,
        }
    }
}

/// What kind of calendar event a [`DisplayEvent`] renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Reservation,
    ManualBlock,
    AutoBlock,
    PastOverlay,
}

/// One event in the calendar display list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: EventKind,
}

/// Which action an admin selection maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockAction {
    /// The selection is not yet fully manually blocked — create blocks.
    Block,
    /// The selection is already fully manually blocked — remove blocks.
    Unblock,
}

/// Answers availability queries for one resource.
pub struct AvailabilityEngine {
    clock: CivilClock,
    time_source: Box<dyn TimeSource>,
    past_window: Duration,
}

impl AvailabilityEngine {
    /// Build an engine using the system clock for "now".
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidTimezone` when neither the
    /// configured zone nor the fallback resolves — the engine's one fatal
    /// configuration error.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_time_source(config, Box::new(SystemTimeSource))
    }

    /// Build an engine with an injected time source, for deterministic
    /// evaluation of the time-dependent past overlay.
    pub fn with_time_source(config: &EngineConfig, time_source: Box<dyn TimeSource>) -> Result<Self> {
        let clock = CivilClock::new(&config.timezone, config.default_timezone.as_deref())?;
        Ok(Self {
            clock,
            time_source,
            past_window: Duration::days(config.past_window_days),
        })
    }

    pub fn clock(&self) -> &CivilClock {
        &self.clock
    }

    /// Whether every hour of `range` is blocked by at least one source —
    /// a manual block or an active rule. Returns false at the first
    /// uncovered hour.
    pub fn is_range_fully_blocked(&self, snapshot: &Snapshot, range: Interval) -> bool {
        let mut cursor = range.start;
        while cursor < range.end {
            let step_end = (cursor + Duration::hours(1)).min(range.end);
            let slice = Interval {
                start: cursor,
                end: step_end,
            };
            let covered = manual::is_manually_blocked(slice.start, slice.end, &snapshot.manual_blocks)
                || evaluator::auto_blocked(snapshot, slice, &self.clock);
            if !covered {
                return false;
            }
            cursor += Duration::hours(1);
        }
        true
    }

    /// Whether manual blocks alone cover every hour of `range`.
    pub fn is_range_fully_manually_blocked(&self, snapshot: &Snapshot, range: Interval) -> bool {
        manual::fully_covered_by_manual(range.start, range.end, &snapshot.manual_blocks)
    }

    /// The action an admin selection of `range` maps to: unblock when the
    /// selection is already fully manually blocked, block otherwise.
    pub fn toggle_action(&self, snapshot: &Snapshot, range: Interval) -> BlockAction {
        if self.is_range_fully_manually_blocked(snapshot, range) {
            BlockAction::Unblock
        } else {
            BlockAction::Block
        }
    }

    /// All rule-derived blocked intervals inside `range`, merged across the
    /// day rule and every hour rule into one sorted disjoint set.
    pub fn blocked_intervals(&self, snapshot: &Snapshot, range: Interval) -> Vec<Interval> {
        let mut intervals = Vec::new();
        if let Some(day_rule) = &snapshot.day_rule {
            intervals.extend(expander::expand_day_rule(day_rule, range, &self.clock));
        }
        for rule in &snapshot.hour_rules {
            intervals.extend(expander::expand_hour_rule(rule, range, &self.clock));
        }
        merge_intervals(intervals)
    }

    /// Build the calendar display list for `range`: reservations and manual
    /// blocks pass through, rule expansions contribute auto-block events
    /// (minus any interval a manual block already fully covers, so blocked
    /// regions are never drawn twice), and a trailing past overlay covers
    /// `[now − past_window, now)`.
    pub fn build_display_events(&self, snapshot: &Snapshot, range: Interval) -> Vec<DisplayEvent> {
        let mut events = Vec::new();

        for reservation in &snapshot.reservations {
            if reservation.start < range.end && reservation.end > range.start {
                events.push(DisplayEvent {
                    id: reservation.id.clone(),
                    title: reservation.name.clone(),
                    start: reservation.start,
                    end: reservation.end,
                    kind: EventKind::Reservation,
                });
            }
        }

        for block in &snapshot.manual_blocks {
            if block.start < range.end && block.end > range.start {
                events.push(DisplayEvent {
                    id: block.id.clone(),
                    title: "Blocked".to_string(),
                    start: block.start,
                    end: block.end,
                    kind: EventKind::ManualBlock,
                });
            }
        }

        if let Some(day_rule) = &snapshot.day_rule {
            let intervals = expander::expand_day_rule(day_rule, range, &self.clock);
            self.push_auto_events(&mut events, &day_rule.id, intervals, snapshot);
        }
        for rule in &snapshot.hour_rules {
            let intervals = expander::expand_hour_rule(rule, range, &self.clock);
            self.push_auto_events(&mut events, &rule.id, intervals, snapshot);
        }

        let now = self.time_source.now();
        events.push(DisplayEvent {
            id: "past".to_string(),
            title: String::new(),
            start: now - self.past_window,
            end: now,
            kind: EventKind::PastOverlay,
        });

        events
    }

    fn push_auto_events(
        &self,
        events: &mut Vec<DisplayEvent>,
        rule_id: &str,
        intervals: Vec<Interval>,
        snapshot: &Snapshot,
    ) {
        for interval in intervals {
            // A manual block covering the whole interval already renders its
            // own event; emitting the auto block too would double-draw.
            if manual::fully_covered_by_manual(interval.start, interval.end, &snapshot.manual_blocks)
            {
                continue;
            }
            events.push(DisplayEvent {
                id: format!("{}-{}", rule_id, interval.start.timestamp()),
                title: "Unavailable".to_string(),
                start: interval.start,
                end: interval.end,
                kind: EventKind::AutoBlock,
            });
        }
    }
}
