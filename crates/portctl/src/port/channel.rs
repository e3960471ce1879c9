//! Mapping of ports onto transceiver channels.
//!
//! Newer agents report every channel a port occupies. For older agents
//! only the first channel is known and the rest is derived from the port
//! speed: 20G ports span two lanes, 40G ports span four, everything else
//! uses a single lane.

use std::collections::BTreeMap;

use crate::rpc::types::{PortId, TransceiverId, TransceiverIdx};

/// Number of lanes a port of the given speed occupies.
///
/// Speeds without a multi-lane mapping, including unknown ones, use one
/// lane.
pub fn lanes_for_speed(speed_mbps: Option<u32>) -> i32 {
    match speed_mbps {
        Some(20_000) => 2,
        Some(40_000) => 4,
        _ => 1,
    }
}

/// Channels a port occupies, derived from its speed.
pub fn derive_channels(speed_mbps: Option<u32>, start_channel: i32) -> Vec<i32> {
    (start_channel..start_channel.saturating_add(lanes_for_speed(speed_mbps))).collect()
}

/// Channels a port occupies on its transceiver.
///
/// An explicit, non-empty channel list is used as-is. Otherwise the
/// channels are derived from `speed_mbps`, starting at the reported first
/// channel (0 when missing).
pub fn port_channels(idx: &TransceiverIdx, speed_mbps: Option<u32>) -> Vec<i32> {
    match &idx.channels {
        Some(channels) if !channels.is_empty() => channels.clone(),
        _ => derive_channels(speed_mbps, idx.channel_id.unwrap_or(0)),
    }
}

/// Which port owns each channel of each transceiver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap {
    map: BTreeMap<TransceiverId, BTreeMap<i32, PortId>>,
}

impl ChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the channels `port` occupies on its transceiver.
    pub fn insert_port(&mut self, port: PortId, idx: &TransceiverIdx, speed_mbps: Option<u32>) {
        let channels = self.map.entry(idx.transceiver_id).or_default();
        for ch in port_channels(idx, speed_mbps) {
            channels.insert(ch, port);
        }
    }

    /// Transceiver ids seen so far, ascending.
    pub fn transceivers(&self) -> Vec<TransceiverId> {
        self.map.keys().copied().collect()
    }

    /// Port that owns `channel` on `transceiver`.
    pub fn port_for(&self, transceiver: TransceiverId, channel: i32) -> Option<PortId> {
        self.map.get(&transceiver)?.get(&channel).copied()
    }

    /// Distinct ports on `transceiver`, ascending by port id.
    pub fn ports(&self, transceiver: TransceiverId) -> Vec<PortId> {
        let mut ports: Vec<PortId> = self
            .map
            .get(&transceiver)
            .map(|chs| chs.values().copied().collect())
            .unwrap_or_default();
        ports.sort_unstable();
        ports.dedup();
        ports
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
