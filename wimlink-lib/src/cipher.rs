//! Repeating-key XOR transform over single-byte character codes.
//!
//! The transform is symmetric: the same XOR is applied to encrypt and to
//! decrypt. On the wire every byte is rendered as exactly two uppercase hex
//! digits, so a ciphertext is always twice as long as its plaintext.

use crate::error::WimError;
use std::str::FromStr;

/// A validated XOR key: non-empty, every character fits in one byte.
///
/// Validating once at construction means the per-call contract of the
/// cipher functions cannot fail on the key, only on the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorKey {
    bytes: Vec<u8>,
}

impl XorKey {
    pub fn new(key: &str) -> Result<Self, WimError> {
        if key.is_empty() {
            return Err(WimError::InvalidKey);
        }
        let bytes = chars_to_bytes(key)?;
        Ok(Self { bytes })
    }

    /// Key byte for position `i`, cycling over the key.
    fn byte_at(&self, i: usize) -> u8 {
        self.bytes[i % self.bytes.len()]
    }
}

impl FromStr for XorKey {
    type Err = WimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XorKey::new(s)
    }
}

impl TryFrom<&str> for XorKey {
    type Error = WimError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        XorKey::new(s)
    }
}

/// Encrypt `text` with the repeating key and render the result as uppercase
/// hex, two digits per character.
///
/// Characters above U+00FF have no single-byte code and are rejected with
/// [`WimError::UnencodableChar`].
pub fn encrypt_to_hex(text: &str, key: &XorKey) -> Result<String, WimError> {
    let plain = chars_to_bytes(text)?;
    let xored: Vec<u8> = plain
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ key.byte_at(i))
        .collect();
    Ok(hex::encode_upper(xored))
}

/// Decrypt a hex-encoded ciphertext back to text.
///
/// Exact inverse of [`encrypt_to_hex`] for every byte-range plaintext and
/// key. Odd-length input or a non-hex digit fails with
/// [`WimError::MalformedInput`]; digit case is not significant.
pub fn decrypt_from_hex(hex_text: &str, key: &XorKey) -> Result<String, WimError> {
    let bytes = hex::decode(hex_text)?;
    Ok(bytes
        .iter()
        .enumerate()
        .map(|(j, b)| char::from(b ^ key.byte_at(j)))
        .collect())
}

/// Code points of `text` as single bytes, rejecting anything above 0xFF.
fn chars_to_bytes(text: &str) -> Result<Vec<u8>, WimError> {
    text.chars()
        .map(|c| u8::try_from(c as u32).map_err(|_| WimError::UnencodableChar(c)))
        .collect()
}
