//! Manual-block coverage checks.
//!
//! Manual blocks are absolute instants already in the comparison frame, so
//! no civil-time interpretation happens here — stepping is plain
//! chronological arithmetic.

use chrono::{DateTime, Duration, Utc};

use crate::types::ManualBlock;

/// Whether some single manual block fully contains `[start, end)`.
pub fn is_manually_blocked(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    manual_blocks: &[ManualBlock],
) -> bool {
    manual_blocks
        .iter()
        .any(|block| block.start <= start && block.end >= end)
}

/// Whether manual blocks cover every fixed 1-hour step of `[start, end)`
/// (the final step is clipped to `end`).
///
/// Drives two decisions: suppressing a redundant auto-block display event
/// when a manual block already covers the same span, and choosing between
/// "block" and "unblock" when the admin selects a range.
pub fn fully_covered_by_manual(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    manual_blocks: &[ManualBlock],
) -> bool {
    if start >= end {
        return false;
    }

    let mut cursor = start;
    while cursor < end {
        let step_end = (cursor + Duration::hours(1)).min(end);
        if !is_manually_blocked(cursor, step_end, manual_blocks) {
            return false;
        }
        cursor += Duration::hours(1);
    }
    true
}
