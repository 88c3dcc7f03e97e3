//! # chapel-availability
//!
//! DST-aware blocking/availability resolution for bookable resources.
//!
//! Reconciles four independently-specified sources of truth — explicit
//! manual blocks, reservations (informational only), recurring hour-of-day
//! rules, and recurring day-of-week rules, each with date-scoped exceptions
//! — into a single answer: is this interval blocked, and what should the
//! calendar draw? All recurring rules are interpreted in the resource's own
//! civil timezone via `chrono-tz`, never as fixed UTC offsets.
//!
//! ## Modules
//!
//! - [`clock`] — civil-time conversions for the resource zone (local
//!   midnight, weekday names, DST-aware hour resolution)
//! - [`interval`] — half-open intervals and merging into sorted disjoint sets
//! - [`types`] — rule/block/reservation documents and the per-evaluation
//!   [`Snapshot`](types::Snapshot)
//! - [`exception`] — date-scoped carve-outs that suppress a rule
//! - [`evaluator`] — per-slice hour-rule and day-rule checks
//! - [`manual`] — manual-block coverage
//! - [`expander`] — rule → concrete blocked intervals over a query range
//! - [`engine`] — the façade: point queries and the display-event list
//! - [`error`] — error types

pub mod clock;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod exception;
pub mod expander;
pub mod interval;
pub mod manual;
pub mod types;

pub use clock::{CivilClock, FixedTimeSource, SystemTimeSource, TimeSource};
pub use engine::{AvailabilityEngine, BlockAction, DisplayEvent, EngineConfig, EventKind};
pub use error::AvailabilityError;
pub use interval::{merge_intervals, Interval};
pub use types::{DayRule, HourRule, ManualBlock, Reservation, Snapshot, TimeException};
