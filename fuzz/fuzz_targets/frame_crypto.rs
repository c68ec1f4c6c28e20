#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use uds_core::{MacAddress, NetworkInfo, NodeId};
use uds_crypto::{DataFrameConfig, DataFrameCrypto, StaticKeyStore, UDS_DATA_KEY_SLOT};

#[derive(Arbitrary, Debug)]
struct Input {
    master: [u8; 16],
    passphrase: Vec<u8>,
    sender: [u8; 6],
    receiver: [u8; 6],
    sequence_number: u16,
    plaintext: Vec<u8>,
    received: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let store = StaticKeyStore::with_key(UDS_DATA_KEY_SLOT, input.master);
    let network = NetworkInfo::new(MacAddress::new(input.sender), 0x0123_4567_89AB_CDEF, 1, 1);
    let crypto = DataFrameCrypto::new(&DataFrameConfig::new(input.passphrase, network), &store)
        .expect("slot provisioned");

    let sender = MacAddress::new(input.sender);
    let receiver = MacAddress::new(input.receiver);

    // Arbitrary received bytes must never panic
    let _ = crypto.open(&input.received, sender, receiver);

    if let Ok(frame) = crypto.seal(
        &input.plaintext,
        sender,
        receiver,
        NodeId::BROADCAST,
        NodeId::HOST,
        input.sequence_number,
    ) {
        let opened = crypto.open(&frame, sender, receiver).expect("sealed frame opens");
        assert_eq!(opened.payload, input.plaintext);
    }
});
