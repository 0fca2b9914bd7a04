//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock-transport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{ACK_FRAME, CMD_SAM_CONFIGURATION, TFI_DEVICE_TO_HOST};
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::{ControlLine, Level, MockTransport, Transport};
use crate::{device, Result};

/// Frame arbitrary payload bytes the way the controller does: preamble,
/// start code, length pair, payload, data checksum, postamble. Kept
/// independent of `Frame::encode` so dialogue tests don't lean on the
/// codec they exercise.
#[doc(hidden)]
pub fn framed(payload: &[u8]) -> Vec<u8> {
    let len = payload.len() as u8;
    let mut out = vec![0x00, 0x00, 0xFF, len, lcs(len)];
    out.extend_from_slice(payload);
    out.push(dcs(payload));
    out.push(0x00);
    out
}

/// Full response frame for `cmd`: direction marker, echoed response code,
/// then `data`.
#[doc(hidden)]
pub fn response_frame(cmd: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![TFI_DEVICE_TO_HOST, cmd.wrapping_add(1)];
    payload.extend_from_slice(data);
    framed(&payload)
}

/// The 6-byte acknowledge frame as queued bytes.
#[doc(hidden)]
pub fn ack() -> Vec<u8> {
    ACK_FRAME.to_vec()
}

/// Queue the responses `Device::initialize` consumes: the ACK and the empty
/// SAMConfiguration answer.
#[doc(hidden)]
pub fn seed_initialize(mock: &mut MockTransport) {
    mock.push_response(ack());
    mock.push_response(response_frame(CMD_SAM_CONFIGURATION, &[]));
}

/// Transport wrapper delegating into a shared mock so tests can inspect the
/// recorded exchanges after a Device takes ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        self.inner.borrow_mut().transfer(tx, rx)
    }

    fn set_control_line(&mut self, line: ControlLine, level: Level) -> Result<()> {
        self.inner.borrow_mut().set_control_line(line, level)
    }

    fn delay_ms(&mut self, ms: u64) {
        self.inner.borrow_mut().delay_ms(ms)
    }

    fn elapsed_ms(&self) -> u64 {
        self.inner.borrow().elapsed_ms()
    }
}

/// Convenience: an initialized Device on a shared mock, pre-seeded with the
/// init handshake plus any extra responses, returned together with the mock
/// handle for inspection.
#[doc(hidden)]
pub fn initialized_mock_device(
    extra: Vec<Vec<u8>>,
) -> Result<(
    device::Device<device::Initialized>,
    Rc<RefCell<MockTransport>>,
)> {
    let inner = Rc::new(RefCell::new(MockTransport::new()));
    {
        let mut mock = inner.borrow_mut();
        seed_initialize(&mut mock);
        for resp in extra {
            mock.push_response(resp);
        }
    }
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(inner.clone()));
    let initialized = device::Device::new_with_transport(boxed).initialize()?;
    Ok((initialized, inner))
}
