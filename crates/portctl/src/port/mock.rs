//! In-memory switch services for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::rpc::types::{
    AdminState, Channel, ChannelSensors, LinkNeighbor, OperState, PortId, PortInfo, PortStats,
    PortStatus, Sensor, TransceiverId, TransceiverIdx, TransceiverInfo,
};
use crate::rpc::{Error, Result, SwitchAgent, TransceiverService};

/// A call made against [`MockAgent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetPortStatus(Vec<PortId>),
    GetAllPortInfo,
    GetPortInfo(PortId),
    GetAllPortStats,
    GetPortStats(PortId),
    SetPortState(PortId, bool),
    GetLldpNeighbors,
}

#[derive(Debug, Default)]
pub struct MockAgent {
    pub statuses: BTreeMap<PortId, PortStatus>,
    pub infos: BTreeMap<PortId, PortInfo>,
    pub stats: BTreeMap<PortId, PortStats>,
    pub neighbors: Vec<LinkNeighbor>,
    calls: Mutex<Vec<Call>>,
}

impl MockAgent {
    pub fn add_port(&mut self, info: PortInfo, status: PortStatus) {
        self.statuses.insert(info.port_id, status);
        self.infos.insert(info.port_id, info);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the state-changing calls, in order.
    pub fn state_changes(&self) -> Vec<(PortId, bool)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::SetPortState(port, enable) => Some((port, enable)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn not_found(port: PortId) -> Error {
        Error::Service {
            service: "agent",
            code: 1,
            message: format!("port {} not found", port),
        }
    }
}

impl SwitchAgent for MockAgent {
    async fn get_port_status(&self, ports: &[PortId]) -> Result<BTreeMap<PortId, PortStatus>> {
        self.record(Call::GetPortStatus(ports.to_vec()));
        Ok(self
            .statuses
            .iter()
            .filter(|(id, _)| ports.is_empty() || ports.contains(id))
            .map(|(id, s)| (*id, s.clone()))
            .collect())
    }

    async fn get_all_port_info(&self) -> Result<BTreeMap<PortId, PortInfo>> {
        self.record(Call::GetAllPortInfo);
        Ok(self.infos.clone())
    }

    async fn get_port_info(&self, port: PortId) -> Result<PortInfo> {
        self.record(Call::GetPortInfo(port));
        self.infos
            .get(&port)
            .cloned()
            .ok_or_else(|| Self::not_found(port))
    }

    async fn get_all_port_stats(&self) -> Result<BTreeMap<PortId, PortStats>> {
        self.record(Call::GetAllPortStats);
        Ok(self.stats.clone())
    }

    async fn get_port_stats(&self, port: PortId) -> Result<PortStats> {
        self.record(Call::GetPortStats(port));
        self.stats
            .get(&port)
            .cloned()
            .ok_or_else(|| Self::not_found(port))
    }

    async fn set_port_state(&self, port: PortId, enable: bool) -> Result<()> {
        self.record(Call::SetPortState(port, enable));
        Ok(())
    }

    async fn get_lldp_neighbors(&self) -> Result<Vec<LinkNeighbor>> {
        self.record(Call::GetLldpNeighbors);
        Ok(self.neighbors.clone())
    }
}

#[derive(Debug, Default)]
pub struct MockQsfp {
    pub infos: BTreeMap<TransceiverId, TransceiverInfo>,
    /// Answer like a service that predates the telemetry call.
    pub not_supported: bool,
    /// Answer with a service error.
    pub fail: bool,
    requested: Mutex<Vec<Vec<TransceiverId>>>,
}

impl MockQsfp {
    /// A service that predates the telemetry call.
    pub fn not_supported() -> Self {
        Self {
            not_supported: true,
            ..Default::default()
        }
    }

    /// A service that fails every telemetry call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<Vec<TransceiverId>> {
        self.requested.lock().unwrap().clone()
    }
}

impl TransceiverService for MockQsfp {
    async fn get_transceiver_info(
        &self,
        ids: &[TransceiverId],
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>> {
        self.requested.lock().unwrap().push(ids.to_vec());
        if self.not_supported {
            return Err(Error::from_rpc(
                "qsfp_service",
                "get_transceiver_info",
                crate::rpc::error::METHOD_NOT_FOUND,
                "Method not found".into(),
            ));
        }
        if self.fail {
            return Err(Error::from_rpc("qsfp_service", "get_transceiver_info", 5, "i2c".into()));
        }
        Ok(self
            .infos
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(id, info)| (*id, info.clone()))
            .collect())
    }
}

pub fn port_info(id: PortId, name: &str, speed_mbps: u32) -> PortInfo {
    PortInfo {
        port_id: id,
        name: name.to_string(),
        speed_mbps,
        admin_state: AdminState::Enabled,
        oper_state: OperState::Up,
        ..Default::default()
    }
}

pub fn port_status(enabled: bool, up: bool, tid: TransceiverId, channel: i32) -> PortStatus {
    PortStatus {
        enabled,
        up,
        present: None,
        transceiver_idx: Some(TransceiverIdx {
            transceiver_id: tid,
            channel_id: Some(channel),
            channels: None,
        }),
        speed_mbps: None,
    }
}

/// A present transceiver reporting `channels` optical channels.
pub fn optics(tid: TransceiverId, channels: i32) -> TransceiverInfo {
    TransceiverInfo {
        port: tid,
        present: true,
        channels: (0..channels)
            .map(|ch| Channel {
                channel: ch,
                sensors: ChannelSensors {
                    rx_pwr: Sensor {
                        value: 0.5,
                        flags: None,
                    },
                    tx_bias: Sensor {
                        value: 6.25,
                        flags: None,
                    },
                    tx_pwr: Some(Sensor {
                        value: 1.0,
                        flags: None,
                    }),
                },
            })
            .collect(),
        ..Default::default()
    }
}
