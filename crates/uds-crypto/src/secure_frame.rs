//! Secure data frames - Wire + Crypto binding
//!
//! Binds the SecureData wire format with CCMP:
//! - Outbound: encrypt payload, then prepend LLC/SNAP and SecureData headers
//! - Inbound: split headers, then decrypt with the sequence number they carry

use std::fmt;

use tracing::warn;
use zeroize::Zeroizing;

use uds_core::{MacAddress, NetworkInfo, NodeId, UdsResult};
use uds_wire::{build_data_payload, parse_data_payload, SecureDataHeader};

use crate::{decrypt_payload, derive_ccmp_key, encrypt_payload, CcmpKey, KeyStore};

/// Data channel used when none is configured
pub const DEFAULT_DATA_CHANNEL: u8 = 1;

/// Data frame crypto configuration for one network
#[derive(Clone)]
pub struct DataFrameConfig {
    /// Network passphrase shared by every node
    pub passphrase: Zeroizing<Vec<u8>>,
    /// Network the frames belong to
    pub network: NetworkInfo,
    /// Channel stamped on outgoing frames
    pub data_channel: u8,
}

impl DataFrameConfig {
    pub fn new(passphrase: impl Into<Vec<u8>>, network: NetworkInfo) -> Self {
        DataFrameConfig {
            passphrase: Zeroizing::new(passphrase.into()),
            network,
            data_channel: DEFAULT_DATA_CHANNEL,
        }
    }

    pub fn with_data_channel(mut self, data_channel: u8) -> Self {
        self.data_channel = data_channel;
        self
    }
}

impl fmt::Debug for DataFrameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFrameConfig")
            .field("passphrase", &"<redacted>")
            .field("network", &self.network)
            .field("data_channel", &self.data_channel)
            .finish()
    }
}

/// Seals and opens the data frames of one network.
///
/// Holds only the derived key, so it can be shared between threads and
/// used for frames in any order. Sequence numbers are the caller's to
/// manage: reusing one with the same sender repeats the CCM nonce.
#[derive(Debug)]
pub struct DataFrameCrypto {
    key: CcmpKey,
    network: NetworkInfo,
    data_channel: u8,
}

impl DataFrameCrypto {
    /// Derive the network key from `config`
    pub fn new(config: &DataFrameConfig, key_store: &dyn KeyStore) -> UdsResult<Self> {
        let key = derive_ccmp_key(&config.passphrase, &config.network, key_store)?;
        Ok(Self::from_key(key, config.network.clone(), config.data_channel))
    }

    /// Use an already derived key
    pub fn from_key(key: CcmpKey, network: NetworkInfo, data_channel: u8) -> Self {
        DataFrameCrypto {
            key,
            network,
            data_channel,
        }
    }

    pub fn network(&self) -> &NetworkInfo {
        &self.network
    }

    pub fn data_channel(&self) -> u8 {
        self.data_channel
    }

    /// Whether the key is still valid for `network`
    pub fn serves(&self, network: &NetworkInfo) -> bool {
        self.network.same_identity(network)
    }

    /// Encrypt `plaintext` and wrap it into a SecureData frame body
    pub fn seal(
        &self,
        plaintext: &[u8],
        sender: MacAddress,
        receiver: MacAddress,
        dest_node: NodeId,
        src_node: NodeId,
        sequence_number: u16,
    ) -> UdsResult<Vec<u8>> {
        let ciphertext = encrypt_payload(plaintext, &self.key, sender, receiver, sequence_number)?;
        build_data_payload(
            &ciphertext,
            self.data_channel,
            dest_node,
            src_node,
            sequence_number,
        )
    }

    /// Split and decrypt a received SecureData frame body
    pub fn open(
        &self,
        frame: &[u8],
        sender: MacAddress,
        receiver: MacAddress,
    ) -> UdsResult<ReceivedData> {
        let data = parse_data_payload(frame).map_err(|e| {
            warn!(%sender, len = frame.len(), error = %e, "dropping malformed data frame");
            e
        })?;

        let payload = decrypt_payload(
            &data.payload,
            &self.key,
            sender,
            receiver,
            data.header.sequence_number,
        )?;

        Ok(ReceivedData {
            header: data.header,
            payload,
        })
    }
}

/// Decrypted data frame with validated contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedData {
    /// SecureData header as received
    pub header: SecureDataHeader,
    /// Decrypted payload
    pub payload: Vec<u8>,
}

impl ReceivedData {
    pub fn sequence_number(&self) -> u16 {
        self.header.sequence_number
    }

    pub fn data_channel(&self) -> u8 {
        self.header.data_channel
    }

    pub fn source(&self) -> NodeId {
        self.header.src_node_id
    }

    pub fn destination(&self) -> NodeId {
        self.header.dest_node_id
    }
}
