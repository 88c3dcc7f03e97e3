//! Error types for availability evaluation.
//!
//! The engine deliberately has almost no error surface: malformed rules,
//! exceptions, or blocks degrade to the least-blocking interpretation
//! instead of failing the whole computation. The one fatal condition is an
//! unresolvable timezone at engine construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid range: start {start} is not before end {end}")]
    InvalidRange { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
