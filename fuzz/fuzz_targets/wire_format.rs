#![no_main]

use libfuzzer_sys::fuzz_target;

use uds_wire::{
    build_data_payload, frame_ether_type, parse_data_payload, SecureDataHeader,
    DATA_PAYLOAD_OVERHEAD,
};

fuzz_target!(|data: &[u8]| {
    let _ = frame_ether_type(data);
    let _ = SecureDataHeader::parse(data);

    if let Ok(parsed) = parse_data_payload(data) {
        // Anything that parses must survive a rebuild
        let rebuilt = build_data_payload(
            &parsed.payload,
            parsed.header.data_channel,
            parsed.header.dest_node_id,
            parsed.header.src_node_id,
            parsed.header.sequence_number,
        )
        .expect("parsed payload fits the size field");

        assert_eq!(rebuilt.len(), DATA_PAYLOAD_OVERHEAD + parsed.payload.len());

        let reparsed = parse_data_payload(&rebuilt).expect("rebuilt payload parses");
        assert_eq!(reparsed.payload, parsed.payload);
        assert_eq!(reparsed.header.protocol_size, parsed.header.protocol_size);
        assert_eq!(reparsed.header.sequence_number, parsed.header.sequence_number);
    }
});
