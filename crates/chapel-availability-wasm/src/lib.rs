//! WASM bindings for chapel-availability.
//!
//! Exposes the blocking queries and display-event builder to the JavaScript
//! calendar front-end via `wasm-bindgen`. All complex types cross the
//! boundary as JSON strings; datetimes are RFC 3339. The caller supplies
//! "now" explicitly, so the past overlay is recomputed on the front-end's
//! own timer rather than inside the WASM module.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p chapel-availability-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/chapel_availability_wasm.wasm
//! ```

use chapel_availability::{
    AvailabilityEngine, BlockAction, DisplayEvent, EngineConfig, FixedTimeSource, Interval,
    Snapshot,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct IntervalDto {
    start: String,
    end: String,
}

impl From<&Interval> for IntervalDto {
    fn from(iv: &Interval) -> Self {
        Self {
            start: iv.start.to_rfc3339(),
            end: iv.end.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct DisplayEventDto {
    id: String,
    title: String,
    start: String,
    end: String,
    kind: String,
}

impl From<&DisplayEvent> for DisplayEventDto {
    fn from(ev: &DisplayEvent) -> Self {
        Self {
            id: ev.id.clone(),
            title: ev.title.clone(),
            start: ev.start.to_rfc3339(),
            end: ev.end.to_rfc3339(),
            kind: match ev.kind {
                chapel_availability::EventKind::Reservation => "reservation".to_string(),
                chapel_availability::EventKind::ManualBlock => "manualBlock".to_string(),
                chapel_availability::EventKind::AutoBlock => "autoBlock".to_string(),
                chapel_availability::EventKind::PastOverlay => "pastOverlay".to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-06-10T14:00:00+00:00")
/// and naive local time (e.g., "2024-06-10T14:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_range(start: &str, end: &str) -> Result<Interval, JsValue> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;
    Interval::new(start, end).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_snapshot(snapshot_json: &str) -> Result<Snapshot, JsValue> {
    serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))
}

fn build_engine(timezone: &str, now: &str) -> Result<AvailabilityEngine, JsValue> {
    let now = parse_datetime(now)?;
    let config = EngineConfig::new(timezone);
    AvailabilityEngine::with_time_source(&config, Box::new(FixedTimeSource(now)))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// ---------------------------------------------------------------------------
// Exported functions
// ---------------------------------------------------------------------------

/// Whether every hour of `[range_start, range_end)` is blocked by a manual
/// block or an active rule.
#[wasm_bindgen]
pub fn is_range_fully_blocked(
    snapshot_json: &str,
    timezone: &str,
    range_start: &str,
    range_end: &str,
) -> Result<bool, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let range = parse_range(range_start, range_end)?;
    let engine = build_engine(timezone, range_start)?;
    Ok(engine.is_range_fully_blocked(&snapshot, range))
}

/// Whether manual blocks alone cover every hour of the range.
#[wasm_bindgen]
pub fn is_range_fully_manually_blocked(
    snapshot_json: &str,
    timezone: &str,
    range_start: &str,
    range_end: &str,
) -> Result<bool, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let range = parse_range(range_start, range_end)?;
    let engine = build_engine(timezone, range_start)?;
    Ok(engine.is_range_fully_manually_blocked(&snapshot, range))
}

/// The action an admin selection maps to: "block" or "unblock".
#[wasm_bindgen]
pub fn toggle_action(
    snapshot_json: &str,
    timezone: &str,
    range_start: &str,
    range_end: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let range = parse_range(range_start, range_end)?;
    let engine = build_engine(timezone, range_start)?;
    Ok(match engine.toggle_action(&snapshot, range) {
        BlockAction::Block => "block".to_string(),
        BlockAction::Unblock => "unblock".to_string(),
    })
}

/// All rule-derived blocked intervals in the range, merged, as a JSON array
/// of `{start, end}` objects.
#[wasm_bindgen]
pub fn blocked_intervals(
    snapshot_json: &str,
    timezone: &str,
    range_start: &str,
    range_end: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let range = parse_range(range_start, range_end)?;
    let engine = build_engine(timezone, range_start)?;
    let dtos: Vec<IntervalDto> = engine
        .blocked_intervals(&snapshot, range)
        .iter()
        .map(IntervalDto::from)
        .collect();
    serde_json::to_string(&dtos).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The full calendar display list for the range, as a JSON array of
/// `{id, title, start, end, kind}` objects. `now` anchors the past overlay.
#[wasm_bindgen]
pub fn build_display_events(
    snapshot_json: &str,
    timezone: &str,
    range_start: &str,
    range_end: &str,
    now: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let range = parse_range(range_start, range_end)?;
    let engine = build_engine(timezone, now)?;
    let dtos: Vec<DisplayEventDto> = engine
        .build_display_events(&snapshot, range)
        .iter()
        .map(DisplayEventDto::from)
        .collect();
    serde_json::to_string(&dtos).map_err(|e| JsValue::from_str(&e.to_string()))
}
