//! LLDP neighbor types.

use serde::{Deserialize, Serialize};

use super::port::PortId;

/// A remote system discovered on one of the switch ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkNeighbor {
    /// Port the neighbor was seen on.
    pub local_port: PortId,
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub port_name: Option<String>,
    #[serde(default)]
    pub chassis_id: Option<String>,
}
