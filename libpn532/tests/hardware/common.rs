#![cfg(feature = "spi")]

//! Shared helper for on-target tests.
//!
//! Opens the PN532 on the default wiring and brings it up. On machines
//! without the SPI bus or the GPIO character device (CI, developer
//! laptops) opening fails early; that case is reported as `Ok(None)` so
//! the tests can pass without hardware.

use libpn532::device::{Device, DeviceBuilder, Initialized};
use libpn532::{Error, Result};

/// BCM pin driving NSS. GPIO 8 is CE0 on the Pi header.
pub const CS_PIN: u8 = 8;
/// BCM pin driving RSTPD_N.
pub const RESET_PIN: u8 = 25;

/// Open and initialize a reader on the default pins.
///
/// - `Ok(Some(device))` : reader found and brought up
/// - `Ok(None)` : no SPI/GPIO on this machine
/// - `Err(e)` : the reader is present but misbehaving
pub fn open_and_initialize_reader() -> Result<Option<Device<Initialized>>> {
    let builder = match DeviceBuilder::new().with_spi_pins(CS_PIN, RESET_PIN) {
        Ok(builder) => builder,
        Err(Error::Spi(_)) | Err(Error::Gpio(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    let device = builder.build_uninitialized()?;
    Ok(Some(device.initialize()?))
}
