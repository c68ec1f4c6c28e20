//! Addressing types for UDS data frames
//!
//! MAC addresses identify 802.11 stations, node ids identify peers
//! within one UDS network.

use std::fmt;

/// MAC address size in bytes
pub const MAC_ADDRESS_SIZE: usize = 6;

/// 802.11 station address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(pub [u8; MAC_ADDRESS_SIZE]);

impl MacAddress {
    pub const ZERO: MacAddress = MacAddress([0; MAC_ADDRESS_SIZE]);
    pub const BROADCAST: MacAddress = MacAddress([0xFF; MAC_ADDRESS_SIZE]);

    #[inline]
    pub const fn new(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; MAC_ADDRESS_SIZE] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; MAC_ADDRESS_SIZE] {
        self.0
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }
}

impl From<[u8; MAC_ADDRESS_SIZE]> for MacAddress {
    fn from(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mac({})", self)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// Node identity within one network, assigned by the host on join
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Host node of a network
    pub const HOST: NodeId = NodeId(1);
    /// Destination for frames addressed to every node
    pub const BROADCAST: NodeId = NodeId(0xFFFF);

    #[inline]
    pub fn new(id: u16) -> Self {
        NodeId(id)
    }

    #[inline]
    pub fn is_broadcast(self) -> bool {
        self == Self::BROADCAST
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        NodeId(u16::from_be_bytes(bytes))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
