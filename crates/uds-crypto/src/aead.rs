//! Payload encryption using AES-128-CCM (CCMP)

use aes::Aes128;
use ccm::{
    aead::{generic_array::GenericArray, Aead, KeyInit, Payload},
    consts::{U13, U8},
    Ccm,
};
use tracing::error;

use uds_core::{MacAddress, UdsError, UdsResult};

use crate::{build_aad, build_nonce, CcmpKey};

/// CCMP with an 8-byte MIC and 13-byte nonce
pub type Aes128Ccmp = Ccm<Aes128, U8, U13>;

/// Tag size appended to every ciphertext
pub const CCMP_TAG_SIZE: usize = 8;

fn cipher(key: &CcmpKey) -> Aes128Ccmp {
    Aes128Ccmp::new(GenericArray::from_slice(key.as_bytes()))
}

/// Encrypt the payload of a data frame sent from `sender` to `receiver`.
///
/// Returns ciphertext with the tag appended.
pub fn encrypt_payload(
    plaintext: &[u8],
    key: &CcmpKey,
    sender: MacAddress,
    receiver: MacAddress,
    sequence_number: u16,
) -> UdsResult<Vec<u8>> {
    let aad = build_aad(sender, receiver);
    let nonce = build_nonce(sender, sequence_number);

    cipher(key)
        .encrypt(
            GenericArray::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &aad,
            },
        )
        .map_err(|_| {
            error!(
                %sender,
                %receiver,
                sequence_number,
                len = plaintext.len(),
                "failed to encrypt data frame"
            );
            UdsError::EncryptionFailed
        })
}

/// Decrypt the payload of a data frame sent from `sender` to `receiver`.
///
/// The input ends with the tag. Nothing is returned unless the tag
/// verifies against the frame addressing and sequence number.
pub fn decrypt_payload(
    ciphertext: &[u8],
    key: &CcmpKey,
    sender: MacAddress,
    receiver: MacAddress,
    sequence_number: u16,
) -> UdsResult<Vec<u8>> {
    if ciphertext.len() < CCMP_TAG_SIZE {
        error!(
            %sender,
            %receiver,
            sequence_number,
            len = ciphertext.len(),
            "failed to decrypt data frame: shorter than tag"
        );
        return Err(UdsError::BufferTooShort {
            expected: CCMP_TAG_SIZE,
            actual: ciphertext.len(),
        });
    }

    let aad = build_aad(sender, receiver);
    let nonce = build_nonce(sender, sequence_number);

    cipher(key)
        .decrypt(
            GenericArray::from_slice(&nonce),
            Payload {
                msg: ciphertext,
                aad: &aad,
            },
        )
        .map_err(|_| {
            error!(
                %sender,
                %receiver,
                sequence_number,
                len = ciphertext.len(),
                "failed to decrypt data frame"
            );
            UdsError::DecryptionFailed
        })
}
