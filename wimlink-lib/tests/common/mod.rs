//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use wimlink_lib::checksum::{crc16, crc16_hex};
#[allow(unused_imports)]
pub use wimlink_lib::cipher::{XorKey, decrypt_from_hex, encrypt_to_hex};
#[allow(unused_imports)]
pub use wimlink_lib::constants::{DEFAULT_KEY, HEADER, MIN_PACKET_LEN, PAYLOAD_OFFSET};
#[allow(unused_imports)]
pub use wimlink_lib::error::WimError;
#[allow(unused_imports)]
pub use wimlink_lib::packet::{ParsedPacket, build_packet, build_packet_strict, parse_packet};

/// Device id used throughout the firmware test tooling
#[allow(dead_code)]
pub const TEST_DEVICE_ID: &str = "IME_345F45AACBCC";

/// The reference message round-tripped by the firmware self test
#[allow(dead_code)]
pub const TEST_MESSAGE: &str = "Hello World!";

/// Ciphertext of `TEST_MESSAGE` under the default key
#[allow(dead_code)]
pub const TEST_CIPHERTEXT: &str = "1F0C1E090345241C3B212113";

/// Full packet for (`TEST_DEVICE_ID`, version "1", `TEST_MESSAGE`)
#[allow(dead_code)]
pub const TEST_PACKET: &str = "WIM1IME_345F45AACBCC1F0C1E090345241C3B2121132C5E";

/// The shared passphrase as a validated key
#[allow(dead_code)]
pub fn test_key() -> XorKey {
    XorKey::new(DEFAULT_KEY).expect("default key is valid")
}
