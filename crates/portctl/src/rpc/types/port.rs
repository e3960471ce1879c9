//! Port status, configuration and counter types.

use serde::{Deserialize, Serialize};

/// Port identifier as used by the switch agent.
pub type PortId = i32;

/// Location of a port on its transceiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransceiverIdx {
    /// Transceiver (cage) id.
    pub transceiver_id: i32,
    /// First channel the port occupies.
    #[serde(default)]
    pub channel_id: Option<i32>,
    /// Every channel the port occupies.
    ///
    /// Older agents omit this; the channels are then derived from the
    /// port speed.
    #[serde(default)]
    pub channels: Option<Vec<i32>>,
}

/// Runtime status of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatus {
    /// Administratively enabled.
    pub enabled: bool,
    /// Link is operationally up.
    pub up: bool,
    /// Transceiver presence as seen by the agent.
    #[serde(default)]
    pub present: Option<bool>,
    /// Transceiver location, if the port sits on one.
    #[serde(default)]
    pub transceiver_idx: Option<TransceiverIdx>,
    /// Configured speed in Mbps.
    #[serde(default)]
    pub speed_mbps: Option<u32>,
}

/// Administrative state of a port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminState {
    #[default]
    Disabled,
    Enabled,
}

impl AdminState {
    /// Upper-case name used in detail output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disabled => "DISABLED",
            Self::Enabled => "ENABLED",
        }
    }
}

/// Operational state of a port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperState {
    #[default]
    Down,
    Up,
}

impl OperState {
    /// Upper-case name used in detail output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Down => "DOWN",
            Self::Up => "UP",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Configuration of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    pub port_id: PortId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub speed_mbps: u32,
    pub admin_state: AdminState,
    pub oper_state: OperState,
    #[serde(default)]
    pub vlans: Vec<i32>,
    /// Forward error correction; absent when the agent does not report it.
    #[serde(default)]
    pub fec_enabled: Option<bool>,
}

/// Error counters of one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortErrors {
    pub errors: u64,
    pub discards: u64,
}

/// Traffic counters of one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortCounters {
    pub bytes: u64,
    pub ucast_pkts: u64,
    pub multicast_pkts: u64,
    pub broadcast_pkts: u64,
    #[serde(default)]
    pub errors: PortErrors,
}

/// Counters of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStats {
    pub name: String,
    pub input: PortCounters,
    pub output: PortCounters,
}
