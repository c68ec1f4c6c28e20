//! Data frame CCMP key derivation
//!
//! The key is the MD5 of the network passphrase, encrypted with AES-128-CTR
//! under the master key of slot 0x2D. The counter block is the MD5 of the
//! network identity:
//! - Bytes 0-5: Host MAC address
//! - Bytes 6-13: Wireless communication id (BE)
//! - Byte 14: Network instance id
//! - Bytes 15-18: Network id (BE)

use std::fmt;

use aes::Aes128;
use ctr::cipher::{generic_array::GenericArray, KeyIvInit, StreamCipher};
use md5::{Digest, Md5};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use uds_core::{NetworkInfo, UdsError, UdsResult};

use crate::{KeyStore, KEY_SIZE};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Key slot holding the master key for data frame crypto
pub const UDS_DATA_KEY_SLOT: u8 = 0x2D;

/// Size of the network identity hashed into the counter block
pub const CTR_INPUT_SIZE: usize = 19;

/// Per-network key protecting UDS data frames
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CcmpKey([u8; KEY_SIZE]);

impl CcmpKey {
    #[inline]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        CcmpKey(bytes)
    }

    /// Raw key bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for CcmpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CcmpKey(..)")
    }
}

fn md5(data: &[u8]) -> [u8; KEY_SIZE] {
    let mut out = [0u8; KEY_SIZE];
    out.copy_from_slice(&Md5::digest(data));
    out
}

/// Serialized network identity fed to the counter hash
pub fn ctr_input(network: &NetworkInfo) -> [u8; CTR_INPUT_SIZE] {
    let mut input = [0u8; CTR_INPUT_SIZE];
    input[0..6].copy_from_slice(network.host_mac.as_bytes());
    input[6..14].copy_from_slice(&network.wlan_comm_id.to_be_bytes());
    input[14] = network.id;
    input[15..19].copy_from_slice(&network.network_id.to_be_bytes());
    input
}

/// Initial counter block of the key derivation for `network`
pub fn data_crypto_ctr(network: &NetworkInfo) -> [u8; KEY_SIZE] {
    md5(&ctr_input(network))
}

/// Derive the CCMP key of `network` from its passphrase.
///
/// Fails only when the key store has no key in `UDS_DATA_KEY_SLOT`, which
/// leaves the whole session unable to exchange data frames.
pub fn derive_ccmp_key(
    passphrase: &[u8],
    network: &NetworkInfo,
    key_store: &dyn KeyStore,
) -> UdsResult<CcmpKey> {
    let master = Zeroizing::new(
        key_store
            .get_key(UDS_DATA_KEY_SLOT)
            .ok_or(UdsError::KeySlotUnavailable(UDS_DATA_KEY_SLOT))?,
    );

    let counter = data_crypto_ctr(network);
    let mut key = md5(passphrase);

    let mut cipher = Aes128Ctr::new(
        GenericArray::from_slice(&master[..]),
        GenericArray::from_slice(&counter),
    );
    cipher.apply_keystream(&mut key);

    debug!(
        host = %network.host_mac,
        network_id = network.network_id,
        "derived data frame key"
    );

    let derived = CcmpKey(key);
    key.zeroize();
    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticKeyStore;
    use proptest::prelude::*;
    use uds_core::MacAddress;

    fn master_key() -> [u8; KEY_SIZE] {
        let mut key = [0u8; KEY_SIZE];
        for (i, b) in key.iter_mut().enumerate() {
            *b = i as u8;
        }
        key
    }

    fn test_network() -> NetworkInfo {
        NetworkInfo::new(
            MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            0x0123_4567_89AB_CDEF,
            1,
            0xAABB_CCDD,
        )
    }

    #[test]
    fn test_ctr_input_layout() {
        assert_eq!(
            hex::encode(ctr_input(&test_network())),
            "0011223344550123456789abcdef01aabbccdd"
        );
    }

    #[test]
    fn test_known_key() {
        let store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, master_key());
        let key = derive_ccmp_key(b"test", &test_network(), &store).unwrap();

        assert_eq!(hex::encode(key.as_bytes()), "d0affb64d8f7385d1a4e1a58d93d91fa");
    }

    #[test]
    fn test_missing_slot() {
        let store = StaticKeyStore::with_key(0x2C, master_key());
        let result = derive_ccmp_key(b"test", &test_network(), &store);

        assert!(matches!(
            result,
            Err(UdsError::KeySlotUnavailable(UDS_DATA_KEY_SLOT))
        ));
    }

    #[test]
    fn test_metadata_does_not_affect_key() {
        let store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, master_key());
        let network = test_network();
        let mut busy = network.clone().with_channel(11).with_max_nodes(16);
        busy.total_nodes = 4;

        assert_eq!(
            derive_ccmp_key(b"pass", &network, &store).unwrap().as_bytes(),
            derive_ccmp_key(b"pass", &busy, &store).unwrap().as_bytes()
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = CcmpKey::from_bytes([0x42; KEY_SIZE]);
        assert_eq!(format!("{:?}", key), "CcmpKey(..)");
    }

    proptest! {
        #[test]
        fn prop_key_deterministic(
            passphrase in proptest::collection::vec(any::<u8>(), 0..64),
            mac in any::<[u8; 6]>(),
            comm_id in any::<u64>(),
            id in any::<u8>(),
            network_id in any::<u32>(),
        ) {
            let store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, master_key());
            let network = NetworkInfo::new(MacAddress::new(mac), comm_id, id, network_id);

            let k1 = derive_ccmp_key(&passphrase, &network, &store).unwrap();
            let k2 = derive_ccmp_key(&passphrase, &network, &store).unwrap();
            prop_assert_eq!(k1.as_bytes(), k2.as_bytes());
        }

        #[test]
        fn prop_key_sensitive_to_every_input(
            passphrase in proptest::collection::vec(any::<u8>(), 1..64),
            byte in 0usize..64,
            field in 0usize..6,
        ) {
            let store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, master_key());
            let network = test_network();
            let base = derive_ccmp_key(&passphrase, &network, &store).unwrap();

            let mut other_pass = passphrase.clone();
            let mut other_net = network.clone();
            let mut other_master = master_key();
            match field {
                0 => {
                    let idx = byte % other_pass.len();
                    other_pass[idx] ^= 0x01;
                }
                1 => other_net.host_mac.0[byte % 6] ^= 0x01,
                2 => other_net.wlan_comm_id ^= 1u64 << (byte % 64),
                3 => other_net.id ^= 0x01,
                4 => other_net.network_id ^= 1u32 << (byte % 32),
                _ => other_master[byte % KEY_SIZE] ^= 0x01,
            }
            let other_store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, other_master);

            let changed = derive_ccmp_key(&other_pass, &other_net, &other_store).unwrap();
            prop_assert_ne!(base.as_bytes(), changed.as_bytes());
        }
    }
}
