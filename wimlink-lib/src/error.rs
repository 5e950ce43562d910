use thiserror::Error;

/// The primary error type for the `wimlink` codec.
///
/// Every variant is a per-packet outcome: errors are returned to the caller
/// at the boundary where they first become observable, never retried and
/// never fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WimError {
    #[error("cipher key is empty")]
    InvalidKey,

    #[error("malformed hex payload: {0}")]
    MalformedInput(String),

    #[error("packet too short: {actual} chars, minimum is {minimum}")]
    TooShort { actual: usize, minimum: usize },

    #[error("bad header: expected {expected:?}, got {actual:?}")]
    BadHeader {
        expected: &'static str,
        actual: String,
    },

    #[error("checksum mismatch: packet carries {embedded}, computed {computed}")]
    ChecksumMismatch { embedded: String, computed: String },

    #[error("character {0:?} does not fit in a single byte")]
    UnencodableChar(char),

    #[error("invalid field: {0}")]
    InvalidField(String),
}

impl From<hex::FromHexError> for WimError {
    fn from(e: hex::FromHexError) -> Self {
        WimError::MalformedInput(e.to_string())
    }
}
