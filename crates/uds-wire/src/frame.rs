//! Data payload assembly
//!
//! Data payload = LLC/SNAP header + SecureData header + payload

use bytes::BufMut;

use uds_core::{NodeId, UdsError, UdsResult};

use crate::{EtherType, LlcHeader, SecureDataHeader, LLC_HEADER_SIZE, SECURE_DATA_HEADER_SIZE};

/// Bytes added in front of every payload
pub const DATA_PAYLOAD_OVERHEAD: usize = LLC_HEADER_SIZE + SECURE_DATA_HEADER_SIZE;

/// Largest payload whose size still fits the 16-bit protocol size field
pub const MAX_DATA_PAYLOAD: usize = u16::MAX as usize - SECURE_DATA_HEADER_SIZE;

/// Body of a received SecureData frame, split into header and payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPayload {
    pub header: SecureDataHeader,
    /// Payload bytes, still encrypted when the frame was protected
    pub payload: Vec<u8>,
}

impl DataPayload {
    #[inline]
    pub fn sequence_number(&self) -> u16 {
        self.header.sequence_number
    }

    #[inline]
    pub fn data_channel(&self) -> u8 {
        self.header.data_channel
    }
}

/// Build the body of a SecureData frame around `data`.
///
/// `data` is the already-processed payload, i.e. ciphertext with tag when
/// the frame is protected, so the header sizes describe what goes on the
/// wire.
pub fn build_data_payload(
    data: &[u8],
    channel: u8,
    dest_node: NodeId,
    src_node: NodeId,
    sequence_number: u16,
) -> UdsResult<Vec<u8>> {
    if data.len() > MAX_DATA_PAYLOAD {
        return Err(UdsError::PayloadTooLarge {
            len: data.len(),
            max: MAX_DATA_PAYLOAD,
        });
    }

    let header = SecureDataHeader::new(
        data.len() as u16,
        channel,
        dest_node,
        src_node,
        sequence_number,
    );

    let mut buf = Vec::with_capacity(DATA_PAYLOAD_OVERHEAD + data.len());
    LlcHeader::new(EtherType::SecureData).serialize(&mut buf);
    header.serialize(&mut buf);
    buf.put_slice(data);

    Ok(buf)
}

/// Split the body of a SecureData frame.
///
/// The frame must end exactly where the SecureData header says it does.
pub fn parse_data_payload(frame: &[u8]) -> UdsResult<DataPayload> {
    let llc = LlcHeader::parse(frame)?;
    if llc.protocol != EtherType::SecureData {
        return Err(UdsError::InvalidWireFormat(format!(
            "Expected SecureData frame, got {:?}",
            llc.protocol
        )));
    }

    let header = SecureDataHeader::parse(&frame[LLC_HEADER_SIZE..])?;

    let payload_start = DATA_PAYLOAD_OVERHEAD;
    let payload_end = payload_start + header.payload_len();
    if frame.len() < payload_end {
        return Err(UdsError::BufferTooShort {
            expected: payload_end,
            actual: frame.len(),
        });
    }
    if frame.len() > payload_end {
        return Err(UdsError::InvalidWireFormat(format!(
            "SecureData frame is {} bytes, header announces {}",
            frame.len(),
            payload_end
        )));
    }

    Ok(DataPayload {
        header,
        payload: frame[payload_start..payload_end].to_vec(),
    })
}
