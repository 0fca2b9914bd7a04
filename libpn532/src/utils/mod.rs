// libpn532/src/utils/mod.rs
//! Small, reusable helpers used across the crate: hex rendering for debug
//! output and dump printing, and timeout/deadline bookkeeping.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
