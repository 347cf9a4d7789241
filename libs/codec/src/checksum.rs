//! CRC-16/CCITT-FALSE Checksum
//!
//! The trailing checksum required by the Pix arrangement: polynomial 0x1021,
//! initial register 0xFFFF, no input/output reflection, no final XOR. The
//! routine is total over all byte sequences and is bit-exact against the EMV
//! reference; the standard check value is `crc16("123456789") == 0x29B1`.

/// Calculate the CRC-16/CCITT-FALSE checksum of a byte sequence.
///
/// Processes input bytes most-significant-bit first through a manual
/// polynomial division; the u16 register truncates to 16 bits on every
/// shift, which is what the format requires.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Render a checksum as exactly 4 uppercase hex digits (e.g. 0x00A3 → "00A3").
pub fn format_crc(crc: u16) -> String {
    hex::encode_upper(crc.to_be_bytes())
}

/// Compute and render the checksum of a payload body in one step.
pub fn checksum_hex(body: &str) -> String {
    format_crc(crc16(body.as_bytes()))
}
