//! CCMP auxiliary inputs (IEEE 802.11-2007, 8.3.3.3)
//!
//! AAD is 22 bytes:
//! - Bytes 0-1: Frame Control (BE, fixed Data | Protected | ToDS)
//! - Bytes 2-7: Receiver address
//! - Bytes 8-13: Transmitter address
//! - Bytes 14-19: Destination address
//! - Bytes 20-21: Sequence Control (BE, zero)
//!
//! Nonce is 13 bytes:
//! - Byte 0: Priority (zero)
//! - Bytes 1-6: Transmitter address
//! - Bytes 7-12: Packet number (4 zero bytes + sequence number BE)

use uds_core::{MacAddress, MAC_ADDRESS_SIZE};

/// AAD size in bytes
pub const AAD_SIZE: usize = 22;

/// CCM nonce size in bytes
pub const CCMP_NONCE_SIZE: usize = 13;

/// Packet number size in bytes
pub const PACKET_NUMBER_SIZE: usize = 6;

/// Frame Control of a protected to-DS data frame
pub const DEFAULT_FRAME_CONTROL: u16 = 0x0841;

/// Build the AAD authenticating a frame from `sender` to `receiver`.
///
/// Duration and the mutable Frame Control bits are left out. UDS networks
/// have no separate BSSID, so the destination is the receiver.
pub fn build_aad(sender: MacAddress, receiver: MacAddress) -> [u8; AAD_SIZE] {
    let mut aad = [0u8; AAD_SIZE];
    aad[0..2].copy_from_slice(&DEFAULT_FRAME_CONTROL.to_be_bytes());
    aad[2..8].copy_from_slice(receiver.as_bytes());
    aad[8..14].copy_from_slice(sender.as_bytes());
    aad[14..20].copy_from_slice(receiver.as_bytes());
    // Bytes 20-21: Sequence Control masked to zero
    aad
}

/// Packet number carried in the nonce.
///
/// Only the low 16 bits are used, so nonces repeat once the sequence
/// number wraps.
#[inline]
pub fn packet_number(sequence_number: u16) -> [u8; PACKET_NUMBER_SIZE] {
    let mut pn = [0u8; PACKET_NUMBER_SIZE];
    pn[4..6].copy_from_slice(&sequence_number.to_be_bytes());
    pn
}

/// Build the CCM nonce for a frame sent by `sender`
pub fn build_nonce(sender: MacAddress, sequence_number: u16) -> [u8; CCMP_NONCE_SIZE] {
    let mut nonce = [0u8; CCMP_NONCE_SIZE];
    // Byte 0: priority
    nonce[1..1 + MAC_ADDRESS_SIZE].copy_from_slice(sender.as_bytes());
    nonce[1 + MAC_ADDRESS_SIZE..].copy_from_slice(&packet_number(sequence_number));
    nonce
}
