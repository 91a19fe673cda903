//! CRC-16/CCITT-FALSE
//!
//! Poly: 0x1021
//! Init: 0xFFFF
//! No reflection, no final XOR. This is the checksum EMVCo mandates for tag 63.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Computes CRC-16/CCITT-FALSE over `data`, MSB first.
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Checksum as it appears on the wire: 4 uppercase hex digits.
pub fn checksum_hex(data: &[u8]) -> String {
    format!("{:04X}", crc16_ccitt_false(data))
}
