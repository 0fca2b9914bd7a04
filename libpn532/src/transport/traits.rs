// libpn532/src/transport/traits.rs

use crate::Result;

/// Control lines a PN532 breakout exposes beside the SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLine {
    /// Active-low reset input (RSTPD_N).
    Reset,
    /// Chip select (NSS). The link drives it by hand because the wake-up
    /// sequence holds it low for longer than a single bus exchange.
    ChipSelect,
}

/// Logic level for a control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Transport trait abstracts I/O away from protocol/device logic.
///
/// Implementations exchange logical MSB-first bytes. The PN532 clocks SPI
/// data LSB-first, so a bus controller that cannot reverse bit order in
/// hardware must do so internally; nothing above this trait ever sees
/// reversed bytes.
pub trait Transport {
    /// Full-duplex exchange: clock `tx` out while filling `rx`. Both
    /// buffers must have the same length. Implementations frame the
    /// exchange with chip select themselves.
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()>;

    /// Drive a control line to the given level.
    fn set_control_line(&mut self, line: ControlLine, level: Level) -> Result<()>;

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u64);

    /// Milliseconds elapsed since the transport was created. Poll loops
    /// measure their deadlines against this clock.
    fn elapsed_ms(&self) -> u64;
}
