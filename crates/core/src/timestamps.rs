//! Timestamp helpers for entity bookkeeping columns.
//!
//! PostgreSQL `TIMESTAMPTZ` keeps microsecond precision, so every value handed
//! to storage is truncated to microseconds first. That keeps what a repository
//! returns identical to what a later read sees.

use chrono::{Duration, SubsecRound, Utc};

use crate::types::Timestamp;

/// Current UTC time truncated to microsecond precision.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// The `last_updated` value for a mutation of a row last touched at `previous`.
///
/// Always strictly later than `previous`, even when the clock has not advanced
/// past it (two writes inside the same microsecond, or a clock step backwards).
pub fn touch(previous: Timestamp) -> Timestamp {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
