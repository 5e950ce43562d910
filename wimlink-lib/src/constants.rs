// Wire-format constants for WIM packets

/// Packet header literal.
pub const HEADER: &str = "WIM";

/// Length of the header field (3 characters)
pub const HEADER_LEN: usize = 3;

/// Length of the version field (1 character)
pub const VERSION_LEN: usize = 1;

/// Length of the device id field (16 characters)
pub const DEVICE_ID_LEN: usize = 16;

/// Length of the checksum field (4 uppercase hex digits)
pub const CHECKSUM_LEN: usize = 4;

/// Character offset of the version field
pub const VERSION_OFFSET: usize = HEADER_LEN;

/// Character offset of the device id field
pub const DEVICE_ID_OFFSET: usize = HEADER_LEN + VERSION_LEN;

/// Character offset of the encrypted payload
pub const PAYLOAD_OFFSET: usize = DEVICE_ID_OFFSET + DEVICE_ID_LEN;

/// Minimum length of a well-formed packet. The firmware rejects anything
/// under 26 characters, which implies at least one payload byte.
pub const MIN_PACKET_LEN: usize = 26;

/// Shared passphrase used by the reference firmware. The codec itself never
/// reads this implicitly; callers pass a key explicitly on every operation.
pub const DEFAULT_KEY: &str = "WirelessIME2024Key!";
