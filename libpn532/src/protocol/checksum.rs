// libpn532/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) for a PN532 frame.
/// LCS is the two's complement of the length: (LEN + LCS) & 0xFF == 0.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) over a frame payload.
/// DCS is chosen so (sum(payload) + DCS) & 0xFF == 0.
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
