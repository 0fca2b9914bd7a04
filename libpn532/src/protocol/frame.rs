// libpn532/src/protocol/frame.rs

use crate::constants::{ACK_FRAME, FRAME_POSTAMBLE, FRAME_PREAMBLE, MAX_PAYLOAD_LEN};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 wire frame codec.
///
/// Format: `[Preamble 0x00] [Start 0x00 0xFF] [LEN] [LCS] [Payload(n)] [DCS]
/// [Postamble 0x00]`, where `(LEN + LCS) & 0xFF == 0` and
/// `(sum(payload) + DCS) & 0xFF == 0`.
///
/// Pure byte-slice functions: no I/O and no bus knowledge. The SPI transport
/// reverses bit order below this layer, so the codec always sees MSB-first
/// bytes.
pub struct Frame;

impl Frame {
    /// Encode a payload into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() || payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadSize {
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(3 + 1 + 1 + payload.len() + 1 + 1);
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Find and decode a frame inside `raw`, returning the payload.
    ///
    /// The controller clocks out 0x00 bytes while it is still preparing a
    /// response, so decoding scans past any number of leading zeros before
    /// the 0xFF start marker. Bytes after the frame are ignored; responses
    /// are read into a fixed-size window and the tail is padding.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        let mut start = 0usize;
        while raw.get(start) == Some(&0x00) {
            start += 1;
        }
        match raw.get(start) {
            None => {
                return Err(Error::FrameFormat(
                    "no start code before end of buffer".into(),
                ));
            }
            Some(0xFF) => {}
            Some(_) => {
                return Err(Error::FrameFormat("start code not found".into()));
            }
        }
        start += 1;

        // LEN and LCS follow the start marker.
        if raw.len() < start + 2 {
            return Err(Error::InvalidLength {
                expected: start + 2,
                actual: raw.len(),
            });
        }
        let len = raw[start];
        let lcs_actual = raw[start + 1];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        // Payload plus the trailing DCS must fit inside the buffer.
        let payload_start = start + 2;
        let dcs_index = payload_start + len as usize;
        if raw.len() <= dcs_index {
            return Err(Error::InvalidLength {
                expected: dcs_index + 1,
                actual: raw.len(),
            });
        }

        let payload = &raw[payload_start..dcs_index];
        let dcs_actual = raw[dcs_index];
        let dcs_expected = dcs(payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        Ok(payload.to_vec())
    }
}

/// Compare the head of `raw` against the fixed ACK frame.
///
/// The ACK is matched byte-for-byte; it never goes through `Frame::decode`
/// (its LEN/LCS pair is the special 0x00/0xFF ack packet code, not a valid
/// length checksum).
pub fn verify_ack(raw: &[u8]) -> bool {
    raw.len() >= ACK_FRAME.len() && raw[..ACK_FRAME.len()] == ACK_FRAME
}
