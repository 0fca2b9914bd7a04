// libpn532/src/transport/spi.rs

#![cfg(feature = "spi")]

use std::thread;
use std::time::Instant;

use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::transport::traits::{ControlLine, Level, Transport};
use crate::utils::ms;
use crate::Result;

/// Default SPI clock. The PN532 tops out at 5 MHz; 1 MHz leaves plenty of
/// margin for breadboard wiring.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;

// Settle time either side of an exchange while chip select is asserted.
const EXCHANGE_SETTLE_MS: u64 = 1;

/// SPI transport for a PN532 breakout on a Raspberry Pi: the SPI0 bus plus
/// two GPIO lines for chip select (NSS) and reset (RSTPD_N).
///
/// NSS is driven by hand rather than through the controller's CE line so
/// the wake-up sequence can hold it low before the first exchange.
pub struct SpiTransport {
    spi: Spi,
    cs: OutputPin,
    reset: OutputPin,
    started: Instant,
}

impl SpiTransport {
    /// Open SPI0 and claim the given BCM pins for NSS and RSTPD_N. Both
    /// lines idle high.
    pub fn open(cs_pin: u8, reset_pin: u8) -> Result<Self> {
        Self::open_with_clock(cs_pin, reset_pin, DEFAULT_CLOCK_HZ)
    }

    /// Like [`open`](Self::open) with an explicit SPI clock rate.
    pub fn open_with_clock(cs_pin: u8, reset_pin: u8, clock_hz: u32) -> Result<Self> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, clock_hz, Mode::Mode0)?;
        let gpio = Gpio::new()?;

        let mut cs = gpio.get(cs_pin)?.into_output();
        let mut reset = gpio.get(reset_pin)?.into_output();
        cs.set_reset_on_drop(false);
        reset.set_reset_on_drop(false);
        cs.set_high();
        reset.set_high();

        Ok(Self {
            spi,
            cs,
            reset,
            started: Instant::now(),
        })
    }
}

impl Transport for SpiTransport {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        self.cs.set_low();
        thread::sleep(ms(EXCHANGE_SETTLE_MS));

        // The PN532 shifts SPI data LSB-first; the Pi's controller only
        // does MSB-first, so reverse bit order on the way out and back.
        let reversed: Vec<u8> = tx.iter().map(|b| b.reverse_bits()).collect();
        let result = self.spi.transfer(rx, &reversed);

        thread::sleep(ms(EXCHANGE_SETTLE_MS));
        self.cs.set_high();
        result?;

        for byte in rx.iter_mut() {
            *byte = byte.reverse_bits();
        }
        Ok(())
    }

    fn set_control_line(&mut self, line: ControlLine, level: Level) -> Result<()> {
        let pin = match line {
            ControlLine::Reset => &mut self.reset,
            ControlLine::ChipSelect => &mut self.cs,
        };
        match level {
            Level::Low => pin.set_low(),
            Level::High => pin.set_high(),
        }
        Ok(())
    }

    fn delay_ms(&mut self, millis: u64) {
        thread::sleep(ms(millis));
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
