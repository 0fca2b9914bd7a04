// libpn532/src/device/builder.rs

use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self { transport: None }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open the Raspberry Pi SPI transport on the given BCM pins for chip
    /// select and reset.
    #[cfg(feature = "spi")]
    pub fn with_spi_pins(self, cs_pin: u8, reset_pin: u8) -> Result<Self> {
        let transport = crate::transport::SpiTransport::open(cs_pin, reset_pin)?;
        Ok(self.with_transport(Box::new(transport)))
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::new_with_transport(t)),
            None => Err(Error::DeviceNotFound),
        }
    }
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
