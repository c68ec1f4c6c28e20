//! Network identity shared by all nodes of one UDS network

use crate::MacAddress;

/// Identity and metadata of an emulated UDS network.
///
/// Owned by the session layer. Only `host_mac`, `wlan_comm_id`, `id` and
/// `network_id` feed the data-frame key; the remaining fields ride along
/// for the layers that parse beacons and manage membership.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NetworkInfo {
    /// MAC address of the host station
    pub host_mac: MacAddress,
    /// Wireless communication id of the application
    pub wlan_comm_id: u64,
    /// Network instance id
    pub id: u8,
    /// Network id chosen by the host
    pub network_id: u32,
    /// 802.11 channel the network operates on
    pub channel: u8,
    /// Maximum number of nodes allowed to join
    pub max_nodes: u8,
    /// Number of nodes currently connected
    pub total_nodes: u8,
}

impl NetworkInfo {
    /// Create network info from its identity fields
    pub fn new(host_mac: MacAddress, wlan_comm_id: u64, id: u8, network_id: u32) -> Self {
        NetworkInfo {
            host_mac,
            wlan_comm_id,
            id,
            network_id,
            ..Default::default()
        }
    }

    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: u8) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// True when both describe the same network for key derivation purposes
    pub fn same_identity(&self, other: &NetworkInfo) -> bool {
        self.host_mac == other.host_mac
            && self.wlan_comm_id == other.wlan_comm_id
            && self.id == other.id
            && self.network_id == other.network_id
    }
}
