//! UDS Crypto Engine - CCMP protection of data frames
//!
//! Provides the cryptographic half of the UDS data path:
//! - CCMP AAD and nonce construction
//! - Per-network key derivation from the passphrase
//! - AES-CCM payload encryption/decryption
//! - Secure data frame sealing/opening

pub mod aead;
pub mod ccmp;
pub mod kdf;
pub mod keystore;
pub mod secure_frame;

pub use aead::*;
pub use ccmp::*;
pub use kdf::*;
pub use keystore::*;
pub use secure_frame::*;
