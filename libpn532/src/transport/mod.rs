// libpn532/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "spi")]
pub mod spi;

pub use mock::MockTransport;
pub use traits::{ControlLine, Level, Transport};
#[cfg(feature = "spi")]
pub use spi::SpiTransport;
