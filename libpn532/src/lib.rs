// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller over SPI, with MIFARE
//! Classic card operations and a small stored-value helper on top.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
