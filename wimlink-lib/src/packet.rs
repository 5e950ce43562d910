//! WIM packet framing: fixed field layout, checksum verification, payload
//! encryption and decryption.
//!
//! Wire layout (character offsets):
//!
//! | Field            | Offset | Length | Content                          |
//! |------------------|--------|--------|----------------------------------|
//! | Header           | 0      | 3      | literal `"WIM"`                  |
//! | Version          | 3      | 1      | version character                |
//! | DeviceId         | 4      | 16     | device identifier                |
//! | EncryptedPayload | 20     | var    | hex ciphertext of the message    |
//! | Checksum         | end-4  | 4      | CRC-16 over everything before it |

use crate::checksum::crc16_hex;
use crate::cipher::{XorKey, decrypt_from_hex, encrypt_to_hex};
use crate::constants::{
    CHECKSUM_LEN, DEVICE_ID_LEN, DEVICE_ID_OFFSET, HEADER, HEADER_LEN, MIN_PACKET_LEN,
    PAYLOAD_OFFSET, VERSION_LEN, VERSION_OFFSET,
};
use crate::error::WimError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fully validated and decrypted packet.
///
/// Produced only when every structural check and the checksum pass; any
/// failure short-circuits to a [`WimError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPacket {
    pub device_id: String,
    pub version: String,
    pub message: String,
}

/// Build a full packet around `plaintext`.
///
/// Field lengths are not validated here, matching the firmware: the caller
/// is responsible for supplying a 16-character device id and a 1-character
/// version. Use [`build_packet_strict`] to have them enforced.
pub fn build_packet(
    device_id: &str,
    version: &str,
    plaintext: &str,
    key: &XorKey,
) -> Result<String, WimError> {
    let payload = encrypt_to_hex(plaintext, key)?;

    let mut packet = String::with_capacity(
        HEADER.len() + version.len() + device_id.len() + payload.len() + CHECKSUM_LEN,
    );
    packet.push_str(HEADER);
    packet.push_str(version);
    packet.push_str(device_id);
    packet.push_str(&payload);

    let checksum = crc16_hex(&packet);
    packet.push_str(&checksum);
    Ok(packet)
}

/// [`build_packet`] with exact field lengths enforced.
///
/// Returns [`WimError::InvalidField`] if the device id is not exactly 16
/// characters or the version not exactly 1.
pub fn build_packet_strict(
    device_id: &str,
    version: &str,
    plaintext: &str,
    key: &XorKey,
) -> Result<String, WimError> {
    validate_fields(device_id, version)?;
    build_packet(device_id, version, plaintext, key)
}

fn validate_fields(device_id: &str, version: &str) -> Result<(), WimError> {
    let id_len = device_id.chars().count();
    if id_len != DEVICE_ID_LEN {
        return Err(WimError::InvalidField(format!(
            "device id must be exactly {DEVICE_ID_LEN} characters, got {id_len}"
        )));
    }
    let version_len = version.chars().count();
    if version_len != VERSION_LEN {
        return Err(WimError::InvalidField(format!(
            "version must be exactly {VERSION_LEN} character, got {version_len}"
        )));
    }
    Ok(())
}

/// Parse and verify a received packet.
///
/// Checks run in order and each failure is terminal: length, header,
/// checksum (compared case-insensitively), then payload decryption. Offsets
/// are character offsets, so a packet carrying non-ASCII text in its device
/// id still splits at the right field boundaries.
pub fn parse_packet(packet: &str, key: &XorKey) -> Result<ParsedPacket, WimError> {
    let chars: Vec<char> = packet.chars().collect();
    if chars.len() < MIN_PACKET_LEN {
        return Err(WimError::TooShort {
            actual: chars.len(),
            minimum: MIN_PACKET_LEN,
        });
    }

    let header: String = chars[..HEADER_LEN].iter().collect();
    if header != HEADER {
        return Err(WimError::BadHeader {
            expected: HEADER,
            actual: header,
        });
    }

    let version: String = chars[VERSION_OFFSET..DEVICE_ID_OFFSET].iter().collect();
    let device_id: String = chars[DEVICE_ID_OFFSET..PAYLOAD_OFFSET].iter().collect();

    // Everything before the trailing 4 checksum digits is covered by the CRC.
    let body_len = chars.len() - CHECKSUM_LEN;
    let embedded: String = chars[body_len..].iter().collect();
    let body: String = chars[..body_len].iter().collect();

    let computed = crc16_hex(&body);
    if !embedded.eq_ignore_ascii_case(&computed) {
        return Err(WimError::ChecksumMismatch { embedded, computed });
    }

    let payload: String = chars[PAYLOAD_OFFSET..body_len].iter().collect();
    let message = decrypt_from_hex(&payload, key)?;

    debug!(%device_id, payload_len = payload.len(), "packet verified");
    Ok(ParsedPacket {
        device_id,
        version,
        message,
    })
}
