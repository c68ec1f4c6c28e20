//! Shared fixtures for the UDS benchmarks

use uds_core::{MacAddress, NetworkInfo};
use uds_crypto::{DataFrameConfig, DataFrameCrypto, StaticKeyStore, KEY_SIZE, UDS_DATA_KEY_SLOT};

pub const HOST_MAC: MacAddress = MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
pub const CLIENT_MAC: MacAddress = MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x66]);

/// Payload sizes exercised by the throughput benchmarks
pub const PAYLOAD_SIZES: [usize; 4] = [64, 256, 1024, 1400];

pub fn bench_network() -> NetworkInfo {
    NetworkInfo::new(HOST_MAC, 0x0123_4567_89AB_CDEF, 1, 0xAABB_CCDD).with_channel(1)
}

pub fn bench_key_store() -> StaticKeyStore {
    StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, [0x42; KEY_SIZE])
}

pub fn bench_config() -> DataFrameConfig {
    DataFrameConfig::new("benchmark passphrase", bench_network())
}

/// Frame crypto for the benchmark network.
///
/// Panics if the fixture key store lacks the data key slot.
pub fn bench_crypto() -> DataFrameCrypto {
    DataFrameCrypto::new(&bench_config(), &bench_key_store())
        .expect("fixture key store provisions the data key slot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uds_core::NodeId;

    #[test]
    fn test_fixture_roundtrip() {
        let crypto = bench_crypto();
        let frame = crypto
            .seal(&[7u8; 64], HOST_MAC, CLIENT_MAC, NodeId::new(2), NodeId::HOST, 0)
            .unwrap();

        let received = crypto.open(&frame, HOST_MAC, CLIENT_MAC).unwrap();
        assert_eq!(received.payload, vec![7u8; 64]);
    }
}
