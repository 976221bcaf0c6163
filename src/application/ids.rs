// src/application/ids.rs
use crate::domain::DomainError;
use chrono::Utc;

/// Source of wall-clock milliseconds for new identifiers
pub trait IdClock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IdClock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Pick an id from the clock, bumping past the largest existing id when the
/// clock has not moved on (same millisecond, or a clock set backwards).
/// Fails if the largest existing id is already `i64::MAX`.
pub fn next_id<C: IdClock + ?Sized>(
    clock: &C,
    existing: impl IntoIterator<Item = i64>,
) -> Result<i64, DomainError> {
    let now = clock.now_millis();
    match existing.into_iter().max() {
        Some(max) if max >= now => max
            .checked_add(1)
            .ok_or(DomainError::IdSpaceExhausted(max)),
        _ => Ok(now),
    }
}
