//! UDS Wire Format - Data frame encapsulation
//!
//! This crate implements the headers carried in the body of an 802.11
//! UDS data frame:
//! - LLC/SNAP header (8 bytes) naming the carried protocol
//! - SecureData header (14 bytes)
//! - Payload (plaintext or CCMP ciphertext with tag)

pub mod frame;
pub mod header;

pub use frame::*;
pub use header::*;
