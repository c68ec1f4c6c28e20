//! Error types for UDS data frames

use thiserror::Error;

/// Core UDS errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UdsError {
    // Wire errors
    #[error("Invalid wire format: {0}")]
    InvalidWireFormat(String),

    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Unknown ether type: {0:#06x}")]
    UnknownEtherType(u16),

    #[error("Payload too large: {len} > {max}")]
    PayloadTooLarge { len: usize, max: usize },

    // Key material errors
    #[error("Key slot {0:#04x} unavailable")]
    KeySlotUnavailable(u8),

    // Crypto errors
    #[error("Encryption failed")]
    EncryptionFailed,

    #[error("Decryption failed")]
    DecryptionFailed,
}

/// Result type for UDS operations
pub type UdsResult<T> = Result<T, UdsError>;
