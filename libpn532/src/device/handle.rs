// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, warn};

use crate::constants::{FRAME_OVERHEAD, SAM_DEFAULT_TIMEOUT};
use crate::device::link::DataLink;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{CardBaud, FirmwareVersion, SamMode};
use crate::utils::{DEFAULT_TIMEOUT_MS, FIRMWARE_TIMEOUT_MS};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
pub struct Device<State = Uninitialized> {
    link: DataLink,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance. Tests hand in
    /// a MockTransport here; hardware callers usually go through the
    /// builder instead.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            link: DataLink::new(transport),
            _state: PhantomData,
        }
    }

    /// Bring the controller up: hardware reset, wake-up, then normal-mode
    /// SAM configuration. Returns an initialized Device on success.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.link.reset()?;
        this.link.wakeup()?;

        let cmd = Command::SamConfiguration {
            mode: SamMode::Normal,
            timeout: SAM_DEFAULT_TIMEOUT,
            use_irq: true,
        };
        match this.dispatch(&cmd, DEFAULT_TIMEOUT_MS)? {
            Response::SamConfigured => {}
            other => {
                return Err(Error::UnexpectedResponse {
                    expected: 0x15,
                    actual: other.response_code(),
                });
            }
        }
        debug!("controller initialized (normal mode)");

        Ok(Device {
            link: this.link,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    /// Run one command dialogue: frame and transmit, wait ready, consume
    /// the ACK, wait ready again, then read and decode the response frame.
    /// Every exchange with the controller funnels through here.
    fn dispatch(&mut self, cmd: &Command, timeout_ms: u64) -> Result<Response> {
        let written =
            codec::encode_command_frame(cmd).and_then(|framed| self.link.write_frame(&framed));
        if let Err(err) = written {
            // One wake-up nudge, then report the failure. No retry loop.
            warn!(
                "command {:#04x} not transmitted: {}; waking the controller",
                cmd.command_code(),
                err
            );
            self.link.wakeup()?;
            return Err(err);
        }

        self.link.wait_ready(timeout_ms)?;
        self.link.read_ack()?;
        self.link.wait_ready(timeout_ms)?;

        // Response payload = direction marker + response code + data.
        let raw = self
            .link
            .read_bytes(cmd.response_capacity() + 2 + FRAME_OVERHEAD)?;
        codec::decode_response_frame(cmd.command_code(), &raw)
    }
}

impl Device<Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: Command, timeout_ms: u64) -> Result<Response> {
        self.dispatch(&cmd, timeout_ms)
    }

    /// Query the controller's firmware version. The controller answers
    /// this immediately, so the query runs with a short timeout.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(Command::GetFirmwareVersion, FIRMWARE_TIMEOUT_MS)? {
            Response::FirmwareVersion { info } => Ok(info),
            other => Err(Error::UnexpectedResponse {
                expected: 0x03,
                actual: other.response_code(),
            }),
        }
    }

    /// Reconfigure the security access module. `timeout` is in 50 ms
    /// units; initialization already ran the normal-mode variant.
    pub fn configure_sam(&mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        };
        match self.execute(cmd, DEFAULT_TIMEOUT_MS)? {
            Response::SamConfigured => Ok(()),
            other => Err(Error::UnexpectedResponse {
                expected: 0x15,
                actual: other.response_code(),
            }),
        }
    }

    /// Look for a single passive target in the field. Zero targets (or
    /// more than one) comes back as `NoCard`.
    pub fn detect_target(&mut self, baud: CardBaud, timeout_ms: u64) -> Result<crate::card::Tag> {
        let cmd = Command::ListPassiveTarget {
            max_targets: 1,
            baud,
        };
        match self.execute(cmd, timeout_ms)? {
            Response::PassiveTarget { tag } => {
                debug!("target {} in field, uid {}", tag.target, tag.uid.to_hex());
                Ok(crate::card::Tag::new(tag))
            }
            other => Err(Error::UnexpectedResponse {
                expected: 0x4B,
                actual: other.response_code(),
            }),
        }
    }

    /// Reset and bring the controller back up, e.g. after a wedged
    /// dialogue. Consumes the handle; the SAM is reconfigured on the way.
    pub fn reinitialize(self) -> Result<Device<Initialized>> {
        let device = Device::<Uninitialized> {
            link: self.link,
            _state: PhantomData,
        };
        device.initialize()
    }

    /// Sleep on the transport clock (a mock advances virtual time).
    pub fn delay_ms(&mut self, ms: u64) {
        self.link.delay_ms(ms)
    }

    /// Transport clock reading, for callers running their own deadlines.
    pub fn elapsed_ms(&self) -> u64 {
        self.link.elapsed_ms()
    }
}
