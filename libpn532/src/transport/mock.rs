// libpn532/src/transport/mock.rs

use crate::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ};
use crate::transport::traits::{ControlLine, Level, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records every bus exchange and control
/// line transition, answers ready probes, and plays back queued data reads.
///
/// Time is simulated: the clock only moves when `delay_ms` is called, so
/// poll-deadline behavior is deterministic under test.
#[derive(Debug)]
pub struct MockTransport {
    /// Every tx buffer handed to `transfer`, in order.
    pub sent: Vec<Vec<u8>>,
    /// Queued data-read answers, consumed front to back.
    pub responses: Vec<Vec<u8>>,
    /// Control line transitions in the order they were driven.
    pub line_changes: Vec<(ControlLine, Level)>,
    /// Ready probes to answer "busy" before the first ready answer.
    pub busy_probes: usize,
    /// When false, every ready probe answers busy (for timeout tests).
    pub ready: bool,
    /// Testing hook: number of data writes that should fail with a
    /// transport error.
    pub write_failures: usize,
    /// Virtual clock, advanced only by `delay_ms`.
    pub clock_ms: u64,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            responses: Vec::new(),
            line_changes: Vec::new(),
            busy_probes: 0,
            ready: true,
            write_failures: 0,
            clock_ms: 0,
        }
    }

    /// Queue raw bytes to answer the next data read.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many ready probes should answer busy before the device
    /// reports ready (for tests exercising the poll loop).
    pub fn set_busy_probes(&mut self, n: usize) {
        self.busy_probes = n;
    }

    /// Set how many subsequent data writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Payloads of every data write, with the SPI prefix stripped.
    pub fn written_frames(&self) -> Vec<Vec<u8>> {
        self.sent
            .iter()
            .filter(|tx| tx.first() == Some(&SPI_DATA_WRITE))
            .map(|tx| tx[1..].to_vec())
            .collect()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        self.sent.push(tx.to_vec());
        match tx.first().copied() {
            Some(SPI_STATUS_READ) => {
                let ready = self.ready && self.busy_probes == 0;
                if self.busy_probes > 0 {
                    self.busy_probes -= 1;
                }
                if let Some(slot) = rx.get_mut(1) {
                    *slot = if ready { SPI_READY } else { 0x00 };
                }
            }
            Some(SPI_DATA_WRITE) => {
                if self.write_failures > 0 {
                    self.write_failures -= 1;
                    return Err(Error::Transport("scripted write failure".into()));
                }
            }
            Some(SPI_DATA_READ) => {
                if self.responses.is_empty() {
                    return Err(Error::Timeout);
                }
                let resp = self.responses.remove(0);
                // The first clocked byte is noise while the prefix shifts
                // out; the answer starts at rx[1]. Anything past the queued
                // bytes stays zero, like a real bus idling after frame end.
                for (slot, byte) in rx.iter_mut().skip(1).zip(resp.iter()) {
                    *slot = *byte;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn set_control_line(&mut self, line: ControlLine, level: Level) -> Result<()> {
        self.line_changes.push((line, level));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(ms);
    }

    fn elapsed_ms(&self) -> u64 {
        self.clock_ms
    }
}
