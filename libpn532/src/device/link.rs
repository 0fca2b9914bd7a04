// libpn532/src/device/link.rs

use log::{debug, trace};

use crate::constants::{
    ACK_FRAME, READY_POLL_INTERVAL_MS, SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ,
    WAKEUP_OSC_START_MS, WAKEUP_SETTLE_MS,
};
use crate::transport::{ControlLine, Level, Transport};
use crate::utils::{bytes_to_hex_spaced, Deadline};
use crate::{Error, Result};

// Reset line hold times from the PN532 application note.
const RESET_SETTLE_MS: u64 = 100;
const RESET_HOLD_MS: u64 = 500;

/// SPI link to the controller: readiness polling, ACK verification and the
/// wake-up/reset sequences. Owns the transport; layers above never see the
/// SPI prefix bytes.
pub struct DataLink {
    transport: Box<dyn Transport>,
}

impl DataLink {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Poll the status register until the device reports ready. The wait
    /// is bounded: once `timeout_ms` elapses on the transport clock the
    /// poll stops with `Timeout`.
    pub fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        let deadline = Deadline::starting_at(self.transport.elapsed_ms(), timeout_ms);
        loop {
            let mut rx = [0u8; 2];
            self.transport.transfer(&[SPI_STATUS_READ, 0x00], &mut rx)?;
            if rx[1] == SPI_READY {
                return Ok(());
            }
            if deadline.expired(self.transport.elapsed_ms()) {
                return Err(Error::Timeout);
            }
            self.transport.delay_ms(READY_POLL_INTERVAL_MS);
        }
    }

    /// Send a fully-encoded frame with the data-write prefix.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        trace!("spi write: {}", bytes_to_hex_spaced(frame));
        let mut tx = Vec::with_capacity(frame.len() + 1);
        tx.push(SPI_DATA_WRITE);
        tx.extend_from_slice(frame);
        let mut rx = vec![0u8; tx.len()];
        self.transport.transfer(&tx, &mut rx)
    }

    /// Clock `count` bytes out of the device with the data-read prefix.
    /// The first received byte arrives while the prefix is still shifting
    /// out and is discarded.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut tx = vec![0u8; count + 1];
        tx[0] = SPI_DATA_READ;
        let mut rx = vec![0u8; count + 1];
        self.transport.transfer(&tx, &mut rx)?;
        rx.remove(0);
        trace!("spi read:  {}", bytes_to_hex_spaced(&rx));
        Ok(rx)
    }

    /// Read the 6-byte acknowledge frame and compare it byte for byte.
    /// Anything else means the command frame was not accepted.
    pub fn read_ack(&mut self) -> Result<()> {
        let raw = self.read_bytes(ACK_FRAME.len())?;
        if !crate::protocol::verify_ack(&raw) {
            return Err(Error::NoAck);
        }
        Ok(())
    }

    /// Wake the controller out of low-power mode: settle, hold chip select
    /// low through the oscillator start-up, clock one dummy byte, settle.
    pub fn wakeup(&mut self) -> Result<()> {
        debug!("waking controller");
        self.transport.delay_ms(WAKEUP_SETTLE_MS);
        self.transport
            .set_control_line(ControlLine::ChipSelect, Level::Low)?;
        self.transport.delay_ms(WAKEUP_OSC_START_MS);
        let mut rx = [0u8; 1];
        self.transport.transfer(&[0x00], &mut rx)?;
        self.transport.delay_ms(WAKEUP_SETTLE_MS);
        Ok(())
    }

    /// Hardware reset through the RSTPD_N line: high, low, high with the
    /// hold times the controller needs.
    pub fn reset(&mut self) -> Result<()> {
        debug!("resetting controller");
        self.transport
            .set_control_line(ControlLine::Reset, Level::High)?;
        self.transport.delay_ms(RESET_SETTLE_MS);
        self.transport
            .set_control_line(ControlLine::Reset, Level::Low)?;
        self.transport.delay_ms(RESET_HOLD_MS);
        self.transport
            .set_control_line(ControlLine::Reset, Level::High)?;
        self.transport.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Sleep on the transport clock (a mock advances virtual time).
    pub fn delay_ms(&mut self, ms: u64) {
        self.transport.delay_ms(ms);
    }

    /// Transport clock reading, for callers running their own deadlines.
    pub fn elapsed_ms(&self) -> u64 {
        self.transport.elapsed_ms()
    }
}
