// libpn532/src/utils/timeout.rs
//! Timeout helpers used across the crate.
//!
//! Centralizes the default timeout values and provides the `Deadline`
//! bookkeeping the readiness polls use. Deadlines are expressed against the
//! transport's millisecond clock rather than wall time so they stay
//! deterministic under the mock transport.

use std::time::Duration;

/// Default timeout in milliseconds for command dialogues when the caller
/// doesn't provide an explicit one.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Timeout for the firmware version query; the controller answers this one
/// quickly or not at all.
pub const FIRMWARE_TIMEOUT_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Expiry point on a millisecond clock. Every polling loop in the crate is
/// bounded by one of these; there is no unbounded wait mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    end_ms: u64,
}

impl Deadline {
    /// Deadline `budget_ms` after `now_ms`, saturating instead of wrapping.
    pub fn starting_at(now_ms: u64, budget_ms: u64) -> Self {
        Self {
            end_ms: now_ms.saturating_add(budget_ms),
        }
    }

    /// True once the clock has reached or passed the deadline.
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms
    }
}
