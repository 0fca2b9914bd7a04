// libpn532/src/utils/hex.rs
//! Hexadecimal helpers used for debugging and display purposes.
//!
//! Small and dependency-free; compact and spaced renderings, a forgiving
//! parser, and the 16-bytes-per-row grid used when printing card dumps.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut s, b| {
            let _ = write!(&mut s, "{:02x}", b);
            s
        },
    )
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            let pair = &cleaned[i..i + 2];
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}

/// Render bytes as a grid of 16 per row with a column header and a decimal
/// row label. When the input is a card dump the row label is the block
/// number.
///
/// ```text
///       0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
/// 00 : 04 a2 31 ...
/// 01 : ...
/// ```
pub fn hex_grid(bytes: &[u8]) -> String {
    let mut s = String::new();

    let header_cols = bytes.len().min(16);
    s.push_str("     ");
    for i in 0..header_cols {
        let _ = write!(&mut s, "{:>2} ", i);
    }

    for (i, b) in bytes.iter().enumerate() {
        if i % 16 == 0 {
            let _ = write!(&mut s, "\n{:02} : ", i / 16);
        }
        let _ = write!(&mut s, "{:02x} ", b);
    }
    s.push('\n');
    s
}
