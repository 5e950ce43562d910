//! CRC-16/ARC over raw packet text.
//!
//! Poly 0x8005 reflected to 0xA001, init 0x0000, no final XOR. The checksum
//! is computed over character code points (lowest 8 bits of each), matching
//! the firmware's bit-by-bit loop exactly.

/// Reflected CRC-16 polynomial.
const POLY: u16 = 0xA001;

/// CRC-16/ARC of `data`.
///
/// `crc16("") == 0` and `crc16("123456789") == 0xBB3D` (the standard check
/// value for this variant).
pub fn crc16(data: &str) -> u16 {
    let mut crc: u16 = 0;
    for ch in data.chars() {
        crc ^= (ch as u32 & 0xFF) as u16;
        for _ in 0..8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ POLY
            } else {
                crc >> 1
            };
        }
    }
    crc
}

/// The 4-digit zero-padded uppercase hex rendering embedded in packets.
pub fn crc16_hex(data: &str) -> String {
    format!("{:04X}", crc16(data))
}
