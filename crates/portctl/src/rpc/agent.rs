//! Switch agent operations.
//!
//! [`SwitchAgent`] is the seam the port commands are written against;
//! [`Connection<Agent>`] is the production implementation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::connection::Connection;
use super::error::Result;
use super::protocol::Agent;
use super::types::{LinkNeighbor, PortId, PortInfo, PortStats, PortStatus};

/// Operations consumed from the switch agent.
#[allow(async_fn_in_trait)]
pub trait SwitchAgent {
    /// Status of the given ports, or of every port when `ports` is empty.
    async fn get_port_status(&self, ports: &[PortId]) -> Result<BTreeMap<PortId, PortStatus>>;

    /// Configuration of every port.
    async fn get_all_port_info(&self) -> Result<BTreeMap<PortId, PortInfo>>;

    /// Configuration of one port.
    async fn get_port_info(&self, port: PortId) -> Result<PortInfo>;

    /// Counters of every port.
    async fn get_all_port_stats(&self) -> Result<BTreeMap<PortId, PortStats>>;

    /// Counters of one port.
    async fn get_port_stats(&self, port: PortId) -> Result<PortStats>;

    /// Set the administrative state of one port.
    async fn set_port_state(&self, port: PortId, enable: bool) -> Result<()>;

    /// LLDP neighbors seen on any port.
    async fn get_lldp_neighbors(&self) -> Result<Vec<LinkNeighbor>>;
}

#[derive(Serialize)]
struct PortsParams<'a> {
    ports: &'a [PortId],
}

#[derive(Serialize)]
struct PortParams {
    port: PortId,
}

#[derive(Serialize)]
struct PortStateParams {
    port: PortId,
    enable: bool,
}

impl SwitchAgent for Connection<Agent> {
    async fn get_port_status(&self, ports: &[PortId]) -> Result<BTreeMap<PortId, PortStatus>> {
        self.request("get_port_status", PortsParams { ports }).await
    }

    async fn get_all_port_info(&self) -> Result<BTreeMap<PortId, PortInfo>> {
        self.request("get_all_port_info", ()).await
    }

    async fn get_port_info(&self, port: PortId) -> Result<PortInfo> {
        self.request("get_port_info", PortParams { port }).await
    }

    async fn get_all_port_stats(&self) -> Result<BTreeMap<PortId, PortStats>> {
        self.request("get_all_port_stats", ()).await
    }

    async fn get_port_stats(&self, port: PortId) -> Result<PortStats> {
        self.request("get_port_stats", PortParams { port }).await
    }

    async fn set_port_state(&self, port: PortId, enable: bool) -> Result<()> {
        self.request("set_port_state", PortStateParams { port, enable })
            .await
    }

    async fn get_lldp_neighbors(&self) -> Result<Vec<LinkNeighbor>> {
        self.request("get_lldp_neighbors", ()).await
    }
}
