//! Headers of a UDS data frame body
//!
//! LLC/SNAP header is 8 bytes:
//! - Byte 0: DSAP (0xAA, SNAP)
//! - Byte 1: SSAP (0xAA, SNAP)
//! - Byte 2: Control (0x03, unnumbered information)
//! - Bytes 3-5: OUI (zero)
//! - Bytes 6-7: Protocol (BE)
//!
//! SecureData header is 14 bytes, every field BE:
//! - Bytes 0-1: Protocol size (header + payload)
//! - Bytes 2-3: Padding
//! - Bytes 4-5: SecureData size (protocol size - 4)
//! - Byte 6: Management flag
//! - Byte 7: Data channel
//! - Bytes 8-9: Sequence number
//! - Bytes 10-11: Destination node id
//! - Bytes 12-13: Source node id
//!
//! The first 4 bytes of the SecureData header belong to an outer container
//! protocol that is not modeled here, which is why the SecureData size
//! excludes them.

use bytes::{Buf, BufMut};

use uds_core::{NodeId, UdsError, UdsResult};

/// LLC/SNAP header size in bytes
pub const LLC_HEADER_SIZE: usize = 8;

/// SecureData header size in bytes
pub const SECURE_DATA_HEADER_SIZE: usize = 14;

/// Bytes of the outer container header counted by `protocol_size` but not by `securedata_size`
pub const OUTER_CONTAINER_HEADER_SIZE: u16 = 4;

/// SAP value signalling a SNAP extension
pub const SNAP_SAP: u8 = 0xAA;

/// LLC control field for unnumbered information PDUs
pub const LLC_CONTROL_UI: u8 = 0x03;

/// Protocols carried behind the LLC/SNAP header
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EtherType {
    /// UDS SecureData frames
    SecureData = 0x876D,
    /// EAPoL frames used during connection setup
    EaPoL = 0x888E,
}

impl EtherType {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x876D => Some(EtherType::SecureData),
            0x888E => Some(EtherType::EaPoL),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

/// SNAP-enabled 802.2 LLC header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LlcHeader {
    pub dsap: u8,
    pub ssap: u8,
    pub control: u8,
    pub oui: [u8; 3],
    pub protocol: EtherType,
}

impl LlcHeader {
    /// Create a SNAP header for the given protocol
    pub fn new(protocol: EtherType) -> Self {
        LlcHeader {
            dsap: SNAP_SAP,
            ssap: SNAP_SAP,
            control: LLC_CONTROL_UI,
            oui: [0; 3],
            protocol,
        }
    }

    /// Parse header from the start of `buf`
    pub fn parse(buf: &[u8]) -> UdsResult<Self> {
        if buf.len() < LLC_HEADER_SIZE {
            return Err(UdsError::BufferTooShort {
                expected: LLC_HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let mut cur = &buf[..LLC_HEADER_SIZE];
        let dsap = cur.get_u8();
        let ssap = cur.get_u8();
        let control = cur.get_u8();
        let mut oui = [0u8; 3];
        cur.copy_to_slice(&mut oui);
        let raw_protocol = cur.get_u16();

        if dsap != SNAP_SAP || ssap != SNAP_SAP || control != LLC_CONTROL_UI {
            return Err(UdsError::InvalidWireFormat(format!(
                "Not a SNAP header: dsap={:#04x} ssap={:#04x} control={:#04x}",
                dsap, ssap, control
            )));
        }

        let protocol =
            EtherType::from_u16(raw_protocol).ok_or(UdsError::UnknownEtherType(raw_protocol))?;

        Ok(LlcHeader {
            dsap,
            ssap,
            control,
            oui,
            protocol,
        })
    }

    /// Append header bytes to `buf`
    pub fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.dsap);
        buf.put_u8(self.ssap);
        buf.put_u8(self.control);
        buf.put_slice(&self.oui);
        buf.put_u16(self.protocol.to_u16());
    }

    pub fn to_bytes(&self) -> [u8; LLC_HEADER_SIZE] {
        let mut out = [0u8; LLC_HEADER_SIZE];
        self.serialize(&mut &mut out[..]);
        out
    }
}

/// Generate the LLC/SNAP header for `protocol`
pub fn encode_link_header(protocol: EtherType) -> [u8; LLC_HEADER_SIZE] {
    LlcHeader::new(protocol).to_bytes()
}

/// Protocol carried by a received LLC-encapsulated frame body
pub fn frame_ether_type(frame: &[u8]) -> UdsResult<EtherType> {
    LlcHeader::parse(frame).map(|header| header.protocol)
}

/// UDS SecureData header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecureDataHeader {
    /// Header + payload size
    pub protocol_size: u16,
    /// `protocol_size` minus the outer container header
    pub securedata_size: u16,
    /// Non-zero for UDS management frames
    pub is_management: u8,
    pub data_channel: u8,
    pub sequence_number: u16,
    pub dest_node_id: NodeId,
    pub src_node_id: NodeId,
}

impl SecureDataHeader {
    /// Header for an application data payload of `payload_len` bytes.
    ///
    /// Sizes wrap at 16 bits; callers keep `payload_len` within
    /// `u16::MAX - SECURE_DATA_HEADER_SIZE`.
    pub fn new(
        payload_len: u16,
        data_channel: u8,
        dest_node_id: NodeId,
        src_node_id: NodeId,
        sequence_number: u16,
    ) -> Self {
        let protocol_size = payload_len.wrapping_add(SECURE_DATA_HEADER_SIZE as u16);
        SecureDataHeader {
            protocol_size,
            securedata_size: protocol_size.wrapping_sub(OUTER_CONTAINER_HEADER_SIZE),
            // Frames sent by applications are never management frames
            is_management: 0,
            data_channel,
            sequence_number,
            dest_node_id,
            src_node_id,
        }
    }

    /// Payload size announced by the header
    #[inline]
    pub fn payload_len(&self) -> usize {
        (self.protocol_size as usize).saturating_sub(SECURE_DATA_HEADER_SIZE)
    }

    #[inline]
    pub fn is_management(&self) -> bool {
        self.is_management != 0
    }

    /// Parse header from the start of `buf`
    pub fn parse(buf: &[u8]) -> UdsResult<Self> {
        if buf.len() < SECURE_DATA_HEADER_SIZE {
            return Err(UdsError::BufferTooShort {
                expected: SECURE_DATA_HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let mut cur = &buf[..SECURE_DATA_HEADER_SIZE];
        let protocol_size = cur.get_u16();
        cur.advance(2);
        let securedata_size = cur.get_u16();
        let is_management = cur.get_u8();
        let data_channel = cur.get_u8();
        let sequence_number = cur.get_u16();
        let dest_node_id = NodeId::new(cur.get_u16());
        let src_node_id = NodeId::new(cur.get_u16());

        if (protocol_size as usize) < SECURE_DATA_HEADER_SIZE {
            return Err(UdsError::InvalidWireFormat(format!(
                "Protocol size {} smaller than header",
                protocol_size
            )));
        }

        if securedata_size != protocol_size - OUTER_CONTAINER_HEADER_SIZE {
            return Err(UdsError::InvalidWireFormat(format!(
                "SecureData size {} inconsistent with protocol size {}",
                securedata_size, protocol_size
            )));
        }

        Ok(SecureDataHeader {
            protocol_size,
            securedata_size,
            is_management,
            data_channel,
            sequence_number,
            dest_node_id,
            src_node_id,
        })
    }

    /// Append header bytes to `buf`
    pub fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16(self.protocol_size);
        buf.put_u16(0); // Padding
        buf.put_u16(self.securedata_size);
        buf.put_u8(self.is_management);
        buf.put_u8(self.data_channel);
        buf.put_u16(self.sequence_number);
        buf.put_u16(self.dest_node_id.0);
        buf.put_u16(self.src_node_id.0);
    }

    pub fn to_bytes(&self) -> [u8; SECURE_DATA_HEADER_SIZE] {
        let mut out = [0u8; SECURE_DATA_HEADER_SIZE];
        self.serialize(&mut &mut out[..]);
        out
    }
}

/// Generate the SecureData header for an application payload of `payload_len` bytes
pub fn encode_secure_data_header(
    payload_len: u16,
    channel: u8,
    dest_node: NodeId,
    src_node: NodeId,
    sequence_number: u16,
) -> [u8; SECURE_DATA_HEADER_SIZE] {
    SecureDataHeader::new(payload_len, channel, dest_node, src_node, sequence_number).to_bytes()
}
